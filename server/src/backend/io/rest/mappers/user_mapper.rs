//! server/src/backend/io/rest/mappers/user_mapper.rs

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::backend::domain::commands::users::{
    RegisterUserCommand, UpdateChildInfoCommand, UpdateParentInfoCommand,
};
use crate::backend::domain::models::user_record::{CompletionRecords, UserRecord as DomainUserRecord};
use shared::{
    RegisterUserRequest, UpdateChildInfoRequest, UpdateParentInfoRequest,
    UserRecord as SharedUserRecord, UserResponse,
};

/// Mapper to convert between shared user-record DTOs and the domain model.
pub struct UserRecordMapper;

impl UserRecordMapper {
    /// Converts a shared UserRecord DTO to a domain UserRecord.
    pub fn to_domain(dto: SharedUserRecord) -> Result<DomainUserRecord> {
        let created_at = DateTime::parse_from_rfc3339(&dto.created_at)
            .context("Failed to parse createdAt from shared DTO")?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&dto.updated_at)
            .context("Failed to parse updatedAt from shared DTO")?
            .with_timezone(&Utc);

        Ok(DomainUserRecord {
            user_id: dto.user_id,
            role: dto.role,
            created_at,
            updated_at,
            parent_info: dto.parent_info,
            child_info: dto.child_info,
            medical_info: dto.medical_info,
            preferences: dto.preferences,
            growth_records: CompletionRecords::from_map(dto.growth_records),
            vaccine_records: CompletionRecords::from_map(dto.vaccine_records),
        })
    }

    /// Converts a domain UserRecord to a shared UserRecord DTO.
    pub fn to_dto(domain: DomainUserRecord) -> SharedUserRecord {
        SharedUserRecord {
            user_id: domain.user_id,
            role: domain.role,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
            parent_info: domain.parent_info,
            child_info: domain.child_info,
            medical_info: domain.medical_info,
            preferences: domain.preferences,
            growth_records: domain.growth_records.into_map(),
            vaccine_records: domain.vaccine_records.into_map(),
        }
    }

    pub fn to_register_command(user_id: String, request: RegisterUserRequest) -> RegisterUserCommand {
        RegisterUserCommand {
            user_id,
            parent_info: request.parent_info,
            child_info: request.child_info,
            medical_info: request.medical_info,
            preferences: request.preferences,
        }
    }

    pub fn to_update_child_command(
        user_id: String,
        request: UpdateChildInfoRequest,
    ) -> UpdateChildInfoCommand {
        UpdateChildInfoCommand {
            user_id,
            name: request.name,
            birth_date: request.birth_date,
            sex: request.sex,
            weight: request.weight,
            blood_type: request.blood_type,
            history_code: request.history_code,
        }
    }

    pub fn to_update_parent_command(
        user_id: String,
        request: UpdateParentInfoRequest,
    ) -> UpdateParentInfoCommand {
        UpdateParentInfoCommand {
            user_id,
            name: request.name,
            phone: request.phone,
            age: request.age,
            city: request.city,
            language: request.language,
        }
    }

    pub fn to_user_response_dto(domain: DomainUserRecord, message: &str) -> UserResponse {
        UserResponse {
            user: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}
