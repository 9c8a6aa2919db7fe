use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use super::age::validate_birth_date;
use super::clock::Clock;
use super::commands::users::{RegisterUserCommand, UpdateChildInfoCommand, UpdateParentInfoCommand};
use super::models::user_record::{
    validate_user_id, CompletionRecords, UserRecord, UserRecordError, UserRole, MAX_CHILD_NAME_LENGTH,
};
use super::record_store::RecordStore;

/// Service for registering users and maintaining their profile data
#[derive(Clone)]
pub struct UserService {
    store: RecordStore,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(store: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a parent's user document with empty completion maps
    pub async fn register_user(&self, command: RegisterUserCommand) -> Result<UserRecord> {
        info!(
            "Registering user {}, child birth date '{}'",
            command.user_id, command.child_info.birth_date
        );

        validate_user_id(&command.user_id)?;
        let today = self.clock.today();

        let mut parent_info = command.parent_info;
        parent_info.name = required(&parent_info.name, UserRecordError::EmptyParentName)?;
        parent_info.email = required(&parent_info.email, UserRecordError::EmptyEmail)?;

        let mut child_info = command.child_info;
        child_info.name = validate_child_name(&child_info.name)?;
        child_info.birth_date = normalize_birth_date(&child_info.birth_date, today)?;
        child_info.sex = required(&child_info.sex, UserRecordError::EmptyChildSex)?;

        let mut preferences = command.preferences;
        preferences.city = required(&preferences.city, UserRecordError::EmptyCity)?;
        if !preferences.consent {
            return Err(UserRecordError::ConsentRequired.into());
        }

        let now = Utc::now();
        let record = UserRecord {
            user_id: command.user_id,
            role: UserRole::Parent,
            created_at: now,
            updated_at: now,
            parent_info,
            child_info,
            medical_info: command.medical_info,
            preferences,
            growth_records: CompletionRecords::new(),
            vaccine_records: CompletionRecords::new(),
        };

        self.store.create(&record).await?;

        info!("✅ Registered user {} (child: {})", record.user_id, record.child_info.name);
        Ok(record)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<UserRecord> {
        info!("Getting user: {}", user_id);
        self.store.load(user_id).await
    }

    /// Apply a partial update to the child information
    pub async fn update_child_info(&self, command: UpdateChildInfoCommand) -> Result<UserRecord> {
        info!("Updating child info for user {}: {:?}", command.user_id, command);

        let today = self.clock.today();
        let name = command.name.as_deref().map(validate_child_name).transpose()?;
        let birth_date = command
            .birth_date
            .as_deref()
            .map(|raw| normalize_birth_date(raw, today))
            .transpose()?;

        let (record, ()) = self
            .store
            .update(&command.user_id, |record| {
                let child = &mut record.child_info;
                if let Some(name) = name {
                    child.name = name;
                }
                if let Some(birth_date) = birth_date {
                    child.birth_date = birth_date;
                }
                if let Some(sex) = command.sex {
                    child.sex = sex;
                }
                if let Some(weight) = command.weight {
                    child.weight = weight;
                }
                if let Some(blood_type) = command.blood_type {
                    child.blood_type = blood_type;
                }
                if let Some(history_code) = command.history_code {
                    child.history_code = history_code;
                }
                record.updated_at = Utc::now();
                Ok(())
            })
            .await?;

        info!("✅ Updated child info for user {}", record.user_id);
        Ok(record)
    }

    /// Apply a partial update to the parent's contact details and preferences.
    /// The email is tied to the account and cannot be changed here.
    pub async fn update_parent_info(&self, command: UpdateParentInfoCommand) -> Result<UserRecord> {
        info!("Updating parent info for user {}: {:?}", command.user_id, command);

        let name = command
            .name
            .as_deref()
            .map(|name| required(name, UserRecordError::EmptyParentName))
            .transpose()?;
        let city = command
            .city
            .as_deref()
            .map(|city| required(city, UserRecordError::EmptyCity))
            .transpose()?;

        let (record, ()) = self
            .store
            .update(&command.user_id, |record| {
                let parent = &mut record.parent_info;
                if let Some(name) = name {
                    parent.name = name;
                }
                if let Some(phone) = command.phone {
                    parent.phone = phone.trim().to_string();
                }
                if let Some(age) = command.age {
                    parent.age = age.trim().to_string();
                }
                if let Some(city) = city {
                    record.preferences.city = city;
                }
                if let Some(language) = command.language {
                    record.preferences.language = language.trim().to_string();
                }
                record.updated_at = Utc::now();
                Ok(())
            })
            .await?;

        info!("✅ Updated parent info for user {}", record.user_id);
        Ok(record)
    }
}

/// Trimmed value, or `missing` when nothing is left
fn required(value: &str, missing: UserRecordError) -> Result<String, UserRecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}

fn validate_child_name(name: &str) -> Result<String, UserRecordError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserRecordError::EmptyChildName);
    }
    if trimmed.chars().count() > MAX_CHILD_NAME_LENGTH {
        return Err(UserRecordError::ChildNameTooLong);
    }
    Ok(trimmed.to_string())
}

/// Blank stays blank (age unknown); anything else must be a real past date
/// and is stored zero-padded.
fn normalize_birth_date(raw: &str, today: NaiveDate) -> Result<String, UserRecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("No birth date provided; schedules will stay unavailable until it is set");
        return Ok(String::new());
    }
    let birth_date = validate_birth_date(trimmed, today)?;
    Ok(birth_date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::age::BirthDateError;
    use crate::backend::domain::models::user_record::{
        ChildInfo, MedicalInfo, ParentInfo, Preferences, UserRole,
    };
    use crate::backend::domain::test_support::test_clock;
    use crate::backend::storage::yaml::test_utils::TestEnvironment;

    fn create_service(env: &TestEnvironment) -> UserService {
        UserService::new(RecordStore::new(env.storage()), test_clock())
    }

    fn register_command(user_id: &str, child_name: &str, birth_date: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            user_id: user_id.to_string(),
            parent_info: ParentInfo {
                name: "Marta".to_string(),
                email: "marta@example.com".to_string(),
                ..Default::default()
            },
            child_info: ChildInfo {
                name: child_name.to_string(),
                birth_date: birth_date.to_string(),
                sex: "F".to_string(),
                ..Default::default()
            },
            medical_info: MedicalInfo::default(),
            preferences: Preferences {
                city: "Bogotá".to_string(),
                language: "Español".to_string(),
                consent: true,
                ..Default::default()
            },
        }
    }

    fn record_error(err: &anyhow::Error) -> Option<&UserRecordError> {
        err.downcast_ref::<UserRecordError>()
    }

    #[tokio::test]
    async fn test_register_user() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let record = service
            .register_user(register_command("uid-1", "  Sofía  ", "2024-1-5"))
            .await?;

        assert_eq!(record.user_id, "uid-1");
        assert_eq!(record.role, UserRole::Parent);
        assert_eq!(record.child_info.name, "Sofía");
        assert_eq!(record.child_info.birth_date, "2024-01-05");
        assert!(record.growth_records.is_empty());
        assert!(record.vaccine_records.is_empty());

        let loaded = service.get_user("uid-1").await?;
        assert_eq!(loaded, record);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_without_birth_date_is_allowed() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let record = service.register_user(register_command("uid-2", "Leo", "")).await?;
        assert_eq!(record.birth_date(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_validation() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let err = service.register_user(register_command("", "Leo", "")).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyUserId));

        let err = service.register_user(register_command("uid", "   ", "")).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyChildName));

        let long_name = "x".repeat(MAX_CHILD_NAME_LENGTH + 1);
        let err = service.register_user(register_command("uid", &long_name, "")).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::ChildNameTooLong));

        let err = service
            .register_user(register_command("uid", "Leo", "2023-02-30"))
            .await
            .unwrap_err();
        assert!(matches!(
            record_error(&err),
            Some(UserRecordError::InvalidBirthDate(BirthDateError::NotACalendarDate(_)))
        ));

        // test_clock() pins today to 2024-06-15
        let err = service
            .register_user(register_command("uid", "Leo", "2024-06-16"))
            .await
            .unwrap_err();
        assert!(matches!(
            record_error(&err),
            Some(UserRecordError::InvalidBirthDate(BirthDateError::InFuture(_)))
        ));

        // Nothing was written by the failed attempts
        assert!(service.get_user("uid").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_register_requires_contact_sex_city_and_consent() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let mut command = register_command("uid", "Leo", "2024-01-15");
        command.parent_info.name = "  ".to_string();
        let err = service.register_user(command).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyParentName));

        let mut command = register_command("uid", "Leo", "2024-01-15");
        command.parent_info.email = String::new();
        let err = service.register_user(command).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyEmail));

        let mut command = register_command("uid", "Leo", "2024-01-15");
        command.child_info.sex = String::new();
        let err = service.register_user(command).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyChildSex));

        let mut command = register_command("uid", "Leo", "2024-01-15");
        command.preferences.city = " ".to_string();
        let err = service.register_user(command).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyCity));

        let mut command = register_command("uid", "Leo", "2024-01-15");
        command.preferences.consent = false;
        let err = service.register_user(command).await.unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::ConsentRequired));

        assert!(service.get_user("uid").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_register_trims_contact_fields() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let mut command = register_command("uid-6", "Leo", "2024-01-15");
        command.parent_info.email = " marta@example.com ".to_string();
        let record = service.register_user(command).await?;

        assert_eq!(record.parent_info.email, "marta@example.com");
        assert_eq!(record.preferences.city, "Bogotá");
        assert!(record.preferences.consent);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_twice_is_rejected() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        service.register_user(register_command("uid-3", "Leo", "2024-01-15")).await?;
        let err = service
            .register_user(register_command("uid-3", "Otro", "2024-01-15"))
            .await
            .unwrap_err();

        assert_eq!(
            record_error(&err),
            Some(&UserRecordError::AlreadyRegistered("uid-3".to_string()))
        );
        assert_eq!(service.get_user("uid-3").await?.child_info.name, "Leo");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_user() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);

        let err = service.get_user("nobody").await.unwrap_err();
        assert_eq!(
            record_error(&err),
            Some(&UserRecordError::NotFound("nobody".to_string()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_update_child_info_is_partial() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);
        let original = service
            .register_user(register_command("uid-4", "Leo", "2024-01-15"))
            .await?;

        let updated = service
            .update_child_info(UpdateChildInfoCommand {
                user_id: "uid-4".to_string(),
                birth_date: Some("2023-12-01".to_string()),
                weight: Some("8.2".to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(updated.child_info.name, "Leo");
        assert_eq!(updated.child_info.sex, "F");
        assert_eq!(updated.child_info.birth_date, "2023-12-01");
        assert_eq!(updated.child_info.weight, "8.2");
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.created_at, original.created_at);

        assert_eq!(service.get_user("uid-4").await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_child_info_validation() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);
        service.register_user(register_command("uid-5", "Leo", "2024-01-15")).await?;

        let err = service
            .update_child_info(UpdateChildInfoCommand {
                user_id: "uid-5".to_string(),
                birth_date: Some("15/01/2024".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            record_error(&err),
            Some(UserRecordError::InvalidBirthDate(BirthDateError::Format))
        ));

        let err = service
            .update_child_info(UpdateChildInfoCommand {
                user_id: "missing".to_string(),
                name: Some("Ana".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            record_error(&err),
            Some(&UserRecordError::NotFound("missing".to_string()))
        );

        assert_eq!(service.get_user("uid-5").await?.child_info.birth_date, "2024-01-15");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_parent_info_is_partial() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);
        let original = service
            .register_user(register_command("uid-7", "Leo", "2024-01-15"))
            .await?;

        let updated = service
            .update_parent_info(UpdateParentInfoCommand {
                user_id: "uid-7".to_string(),
                phone: Some(" 3001234567 ".to_string()),
                city: Some("Medellín".to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(updated.parent_info.name, "Marta");
        assert_eq!(updated.parent_info.email, "marta@example.com");
        assert_eq!(updated.parent_info.phone, "3001234567");
        assert_eq!(updated.preferences.city, "Medellín");
        assert_eq!(updated.preferences.language, "Español");
        assert!(updated.preferences.consent);
        assert_eq!(updated.child_info, original.child_info);
        assert!(updated.updated_at >= original.updated_at);

        assert_eq!(service.get_user("uid-7").await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_parent_info_validation() -> Result<()> {
        let env = TestEnvironment::new().await?;
        let service = create_service(&env);
        service.register_user(register_command("uid-8", "Leo", "2024-01-15")).await?;

        let err = service
            .update_parent_info(UpdateParentInfoCommand {
                user_id: "uid-8".to_string(),
                name: Some("   ".to_string()),
                phone: Some("3001234567".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyParentName));

        let err = service
            .update_parent_info(UpdateParentInfoCommand {
                user_id: "uid-8".to_string(),
                city: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(record_error(&err), Some(&UserRecordError::EmptyCity));

        let err = service
            .update_parent_info(UpdateParentInfoCommand {
                user_id: "missing".to_string(),
                language: Some("English".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            record_error(&err),
            Some(&UserRecordError::NotFound("missing".to_string()))
        );

        // Rejected updates leave the stored document as registered
        assert_eq!(service.get_user("uid-8").await?.parent_info.phone, "");
        Ok(())
    }
}
