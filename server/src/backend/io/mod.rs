//! # IO Module
//!
//! Provides the interface layer between HTTP clients and the domain logic.
//!
//! This module translates requests into domain operations and formats domain
//! results for the app. It owns the communication protocol (REST over JSON)
//! and keeps the boundary between transport and business logic.
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum for async HTTP handling
//! - **Serialization**: Serde for JSON request and response bodies
//! - **State Management**: Axum `State` extractor carrying the services
//! - **Error Handling**: Domain errors mapped to 400/404/409/500

pub mod rest;

pub use rest::*;
