//! server/src/backend/domain/models/user_record.rs

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::backend::domain::age::BirthDateError;
pub use shared::{ChildInfo, MedicalInfo, ParentInfo, Preferences, UserRole};

/// Longest accepted user ID (auth provider UIDs are much shorter)
pub const MAX_USER_ID_LENGTH: usize = 128;

/// Longest accepted child name
pub const MAX_CHILD_NAME_LENGTH: usize = 100;

/// Per-child completion flags keyed by growth-visit or vaccine-dose ID.
///
/// Entries are only ever flipped, never removed. A key that is absent
/// reads as "not done".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionRecords(BTreeMap<String, bool>);

impl CompletionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: BTreeMap<String, bool>) -> Self {
        Self(map)
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> bool {
        let new_value = !self.is_done(id);
        self.0.insert(id.to_string(), new_value);
        new_value
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, bool> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, bool> {
        self.0
    }
}

/// Domain model of the per-user document: profile data plus both completion maps.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user_id: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parent_info: ParentInfo,
    pub child_info: ChildInfo,
    pub medical_info: MedicalInfo,
    pub preferences: Preferences,
    pub growth_records: CompletionRecords,
    pub vaccine_records: CompletionRecords,
}

impl UserRecord {
    /// Stored birth date, or `None` when the field is blank
    pub fn birth_date(&self) -> Option<&str> {
        let raw = self.child_info.birth_date.trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    }

    pub fn is_parent(&self) -> bool {
        self.role == UserRole::Parent
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRecordError {
    #[error("User ID cannot be empty")]
    EmptyUserId,
    #[error("User ID may only contain letters, digits, '-' and '_' (max 128 characters)")]
    InvalidUserId,
    #[error("Parent name cannot be empty")]
    EmptyParentName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Child name cannot be empty")]
    EmptyChildName,
    #[error("Child sex must be provided")]
    EmptyChildSex,
    #[error("City of residence must be provided")]
    EmptyCity,
    #[error("Terms and personal data processing must be accepted")]
    ConsentRequired,
    #[error("Child name cannot exceed 100 characters")]
    ChildNameTooLong,
    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(#[from] BirthDateError),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User already registered: {0}")]
    AlreadyRegistered(String),
}

/// Check that a user ID is usable as a document key
pub fn validate_user_id(user_id: &str) -> Result<(), UserRecordError> {
    if user_id.is_empty() {
        return Err(UserRecordError::EmptyUserId);
    }

    let valid_chars = user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid_chars || user_id.len() > MAX_USER_ID_LENGTH {
        return Err(UserRecordError::InvalidUserId);
    }

    Ok(())
}
