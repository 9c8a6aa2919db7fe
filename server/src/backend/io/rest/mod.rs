//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the pediatric care backend.
//! This layer handles:
//! - JSON request/response serialization
//! - Mapping shared DTOs to domain commands and domain results back to DTOs
//! - Translating domain errors into HTTP status codes
//!
//! Every per-user route takes the user ID from the path; there is no ambient
//! "current user".

pub mod catalog_apis;
pub mod errors;
pub mod growth_apis;
pub mod home_apis;
pub mod mappers;
pub mod user_apis;
pub mod vaccine_apis;

pub use catalog_apis::*;
pub use growth_apis::*;
pub use home_apis::*;
pub use user_apis::*;
pub use vaccine_apis::*;
