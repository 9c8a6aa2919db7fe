//! # Storage Module
//!
//! Handles persistence of the per-user documents.
//!
//! The domain layer only sees the [`UserRecordStorage`] trait, so the backend
//! can be swapped (flat files, a document database) without touching the
//! services.
//!
//! ## Current Implementation
//!
//! - **YAML files**: `{data_dir}/users/{user_id}.yaml`, one document per user
//! - **Atomic writes**: each save goes to a temp file that is renamed over
//!   the document

pub mod traits;
pub mod yaml;

pub use traits::UserRecordStorage;
pub use yaml::{UserRecordRepository, YamlConnection};
