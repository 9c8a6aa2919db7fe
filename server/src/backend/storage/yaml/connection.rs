use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const USERS_DIRECTORY: &str = "users";

/// YamlConnection manages the data directory layout for per-user documents
#[derive(Debug, Clone)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a new connection rooted at `base_directory`, creating the
    /// directory tree if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        let users_path = base_path.join(USERS_DIRECTORY);

        if !users_path.exists() {
            fs::create_dir_all(&users_path).with_context(|| {
                format!("Failed to create data directory {}", users_path.display())
            })?;
            info!("📁 Created data directory: {}", users_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory holding one YAML document per user
    pub fn users_directory(&self) -> PathBuf {
        self.base_directory.join(USERS_DIRECTORY)
    }

    /// Path of the document for a user ID that has already been validated
    pub fn user_file_path(&self, user_id: &str) -> PathBuf {
        self.users_directory().join(format!("{}.yaml", user_id))
    }
}
