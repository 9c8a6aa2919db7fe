/// Test utilities for repository and service tests
///
/// The temporary data directory is removed when the environment is dropped,
/// even if a test panics.
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::YamlConnection;
use super::user_repository::UserRecordRepository;
use crate::backend::storage::traits::UserRecordStorage;

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: YamlConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = YamlConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn user_repository(&self) -> UserRecordRepository {
        UserRecordRepository::new(self.connection.clone())
    }

    /// Repository behind the trait object the services take
    pub fn storage(&self) -> Arc<dyn UserRecordStorage> {
        Arc::new(self.user_repository())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new().await?;
            base_path = env.base_path.clone();
            assert!(env.connection.users_directory().exists());
            std::fs::write(base_path.join("scratch.txt"), "test data")?;
        }

        assert!(!base_path.exists());
        Ok(())
    }
}
