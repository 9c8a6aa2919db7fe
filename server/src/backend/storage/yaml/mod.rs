//! # YAML Storage
//!
//! Flat-file storage: `{data_dir}/users/{user_id}.yaml`, one document per
//! user, written atomically through a temp file and rename.

pub mod connection;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::YamlConnection;
pub use user_repository::UserRecordRepository;
