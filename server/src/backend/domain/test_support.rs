//! Fixtures shared by the domain service tests

use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;

use super::clock::{Clock, FixedClock};
use super::models::user_record::{
    ChildInfo, CompletionRecords, MedicalInfo, ParentInfo, Preferences, UserRecord, UserRole,
};

/// "Today" for every service test
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn test_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(test_today()))
}

pub fn sample_record(user_id: &str, birth_date: &str) -> UserRecord {
    let timestamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    UserRecord {
        user_id: user_id.to_string(),
        role: UserRole::Parent,
        created_at: timestamp,
        updated_at: timestamp,
        parent_info: ParentInfo {
            name: "Marta".to_string(),
            ..Default::default()
        },
        child_info: ChildInfo {
            name: "Lucas".to_string(),
            birth_date: birth_date.to_string(),
            ..Default::default()
        },
        medical_info: MedicalInfo::default(),
        preferences: Preferences::default(),
        growth_records: CompletionRecords::new(),
        vaccine_records: CompletionRecords::new(),
    }
}
