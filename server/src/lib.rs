// Backend module with the domain, storage and REST layers
pub mod backend;
pub mod config;
