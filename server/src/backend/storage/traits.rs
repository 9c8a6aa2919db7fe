//! # Storage Traits
//!
//! This module defines the storage abstraction the domain layer works against,
//! so the per-user document store can be swapped (flat files, a document
//! database, in-memory fakes for tests) without touching the services.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::user_record::UserRecord;

/// Trait defining the interface for per-user document storage
///
/// One document per user ID holds the profile data and both completion maps.
/// Writes replace the whole document.
#[async_trait]
pub trait UserRecordStorage: Send + Sync {
    /// Retrieve the document for `user_id`, or `None` when it does not exist
    async fn get_user_record(&self, user_id: &str) -> Result<Option<UserRecord>>;

    /// Create or replace the document for `record.user_id`
    async fn save_user_record(&self, record: &UserRecord) -> Result<()>;
}
