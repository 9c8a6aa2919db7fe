use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::fs;

use super::connection::YamlConnection;
use crate::backend::domain::models::user_record::{validate_user_id, UserRecord};
use crate::backend::io::rest::mappers::user_mapper::UserRecordMapper;
use crate::backend::storage::traits::UserRecordStorage;
use shared::UserRecord as SharedUserRecord;

/// YAML-file-backed user record repository, one document per user
#[derive(Debug, Clone)]
pub struct UserRecordRepository {
    connection: YamlConnection,
}

impl UserRecordRepository {
    pub fn new(connection: YamlConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl UserRecordStorage for UserRecordRepository {
    async fn get_user_record(&self, user_id: &str) -> Result<Option<UserRecord>> {
        validate_user_id(user_id)?;

        let yaml_path = self.connection.user_file_path(user_id);
        if !yaml_path.exists() {
            debug!("No user document at {}", yaml_path.display());
            return Ok(None);
        }

        let yaml_content = fs::read_to_string(&yaml_path)
            .with_context(|| format!("Failed to read {}", yaml_path.display()))?;
        let shared_record: SharedUserRecord = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", yaml_path.display()))?;

        let record = UserRecordMapper::to_domain(shared_record)
            .context("Failed to map stored user document to domain record")?;

        Ok(Some(record))
    }

    async fn save_user_record(&self, record: &UserRecord) -> Result<()> {
        validate_user_id(&record.user_id)?;

        let yaml_path = self.connection.user_file_path(&record.user_id);
        let shared_record = UserRecordMapper::to_dto(record.clone());
        let yaml_content = serde_yaml::to_string(&shared_record)?;

        // Atomic write using temp file
        let temp_path = yaml_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &yaml_path)
            .with_context(|| format!("Failed to replace {}", yaml_path.display()))?;

        info!("💾 Saved user document for {}", record.user_id);
        Ok(())
    }
}
