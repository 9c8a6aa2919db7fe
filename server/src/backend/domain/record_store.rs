//! Shared access to user documents for the domain services.
//!
//! Every mutation is a read-modify-write of the whole document. Those cycles
//! run under a per-user async lock so two concurrent toggles on one document
//! cannot both start from the same stale copy and drop each other's change.
//! Writes for different users never wait on each other.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::models::user_record::{validate_user_id, UserRecord, UserRecordError};
use crate::backend::storage::traits::UserRecordStorage;

#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<dyn UserRecordStorage>,
    user_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn UserRecordStorage>) -> Self {
        Self {
            storage,
            user_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Lock guarding read-modify-write cycles of one user document
    async fn lock_for(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.entry(user_id.to_string()).or_default().clone()
    }

    /// Load a user document, failing with `UserRecordError::NotFound` when absent
    pub async fn load(&self, user_id: &str) -> Result<UserRecord> {
        validate_user_id(user_id)?;
        self.storage
            .get_user_record(user_id)
            .await?
            .ok_or_else(|| UserRecordError::NotFound(user_id.to_string()).into())
    }

    /// Store a brand new document, failing with `AlreadyRegistered` if one exists
    pub async fn create(&self, record: &UserRecord) -> Result<()> {
        let user_lock = self.lock_for(&record.user_id).await;
        let _guard = user_lock.lock().await;

        if self.storage.get_user_record(&record.user_id).await?.is_some() {
            return Err(UserRecordError::AlreadyRegistered(record.user_id.clone()).into());
        }
        self.storage.save_user_record(record).await
    }

    /// Apply `change` to the stored document and persist the result.
    ///
    /// Nothing is written when `change` fails.
    pub async fn update<T, F>(&self, user_id: &str, change: F) -> Result<(UserRecord, T)>
    where
        F: FnOnce(&mut UserRecord) -> Result<T>,
    {
        let user_lock = self.lock_for(user_id).await;
        let _guard = user_lock.lock().await;

        let mut record = self.load(user_id).await?;
        let output = change(&mut record)?;
        self.storage.save_user_record(&record).await?;

        Ok((record, output))
    }
}
