use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion map keyed by growth-visit or vaccine-dose ID.
/// Missing keys mean "not done".
pub type CompletionMap = BTreeMap<String, bool>;

/// Role of the account owning a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Parent or caregiver registering a child
    #[default]
    Parent,
    /// Pediatrician answering questions
    Doctor,
}

/// Parent/caregiver contact information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
}

/// Child information captured at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildInfo {
    pub name: String,
    /// ISO 8601 date format (YYYY-MM-DD), empty when unknown
    pub birth_date: String,
    pub sex: String,
    pub weight: String,
    pub blood_type: String,
    pub history_code: String,
}

/// Medical background captured at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalInfo {
    pub allergies: String,
    pub conditions: String,
    pub vaccines: String,
    pub eps: String,
}

/// App preferences captured at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub city: String,
    pub language: String,
    pub notifications_allowed: bool,
    pub consent: bool,
}

/// Per-user document holding profile data and both completion maps.
/// Field names follow the stored document layout (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
    #[serde(default)]
    pub parent_info: ParentInfo,
    #[serde(default)]
    pub child_info: ChildInfo,
    #[serde(default)]
    pub medical_info: MedicalInfo,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub growth_records: CompletionMap,
    #[serde(default)]
    pub vaccine_records: CompletionMap,
}

/// Request for registering a parent account; the stored role is always `parent`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub parent_info: ParentInfo,
    #[serde(default)]
    pub child_info: ChildInfo,
    #[serde(default)]
    pub medical_info: MedicalInfo,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Partial update of the child information; `None` leaves a field untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChildInfoRequest {
    pub name: Option<String>,
    pub birth_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub sex: Option<String>,
    pub weight: Option<String>,
    pub blood_type: Option<String>,
    pub history_code: Option<String>,
}

/// Partial update of the parent's contact details and preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParentInfoRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub age: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,
}

/// Response after registering or updating a user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub user: UserRecord,
    pub success_message: String,
}

/// Scheduled check-up tied to an inclusive child age range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthVisit {
    pub id: String,
    pub label: String,
    pub age_from_months: u32,
    pub age_to_months: u32,
    pub description: String,
}

/// Check-up point of the growth and development calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCheckpoint {
    pub id: String,
    pub label: String,
    pub age_months: u32,
    pub coverage: String,
}

/// Single scheduled administration of a named vaccine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineDose {
    pub id: String,
    pub vaccine: String,
    pub age_label: String,
    pub age_months: u32,
}

/// Full growth-visit catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCatalogResponse {
    pub visits: Vec<GrowthVisit>,
}

/// Full growth calendar catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCheckpointCatalogResponse {
    pub checkpoints: Vec<GrowthCheckpoint>,
}

/// Full vaccine-dose catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineCatalogResponse {
    pub doses: Vec<VaccineDose>,
}

/// Growth visit matching the child's current age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentGrowthVisitResponse {
    /// Completed months since birth, `None` when the birth date is missing or invalid
    pub age_months: Option<u32>,
    pub visit: Option<GrowthVisit>,
    pub done: bool,
    pub message: String,
}

/// Status of a growth checkpoint in the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthVisitStatus {
    Done,
    Due,
    Upcoming,
    UnknownAge,
}

/// One row of the growth calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCalendarEntry {
    pub checkpoint: GrowthCheckpoint,
    pub status: GrowthVisitStatus,
    pub status_message: String,
}

/// Growth calendar with a status for every checkpoint, ordered by age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCalendarResponse {
    pub age_months: Option<u32>,
    pub entries: Vec<GrowthCalendarEntry>,
}

/// Hint about the next vaccine dose to schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextDoseHint {
    /// No usable birth date on record
    BirthDateRequired,
    /// First not-done dose due at or after the current age
    Upcoming { dose: VaccineDose },
    /// Every dose in the catalog is marked done
    UpToDate,
    /// Doses are still pending but none is defined at or after the current age
    PendingForCurrentAge,
}

/// Compact vaccine summary for the child's current age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineSummaryResponse {
    pub age_months: Option<u32>,
    pub total_due: usize,
    pub completed: usize,
    pub pending: usize,
    /// Due-by-now doses marked done, ordered by due age
    pub completed_doses: Vec<VaccineDose>,
    /// Due-by-now doses not marked done, ordered by due age
    pub pending_doses: Vec<VaccineDose>,
    pub next_dose: NextDoseHint,
    pub next_dose_description: String,
}

/// Status of a vaccine dose in the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseStatus {
    Applied,
    Needed,
    Planned,
    UnknownAge,
}

/// One dose in the vaccine calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineCalendarEntry {
    pub dose: VaccineDose,
    pub status: DoseStatus,
    pub status_message: String,
}

/// Doses sharing the same due age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineCalendarSection {
    pub title: String,
    pub age_months: u32,
    pub entries: Vec<VaccineCalendarEntry>,
}

/// Vaccine calendar grouped by due age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineCalendarResponse {
    pub age_months: Option<u32>,
    pub sections: Vec<VaccineCalendarSection>,
}

/// Response after toggling a growth visit or vaccine dose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleRecordResponse {
    pub id: String,
    pub done: bool,
    pub success_message: String,
}

/// Home screen data for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeDashboardResponse {
    pub user_id: String,
    pub role: UserRole,
    pub child_name: String,
    pub age_months: Option<u32>,
    /// Only present for parents
    pub growth: Option<CurrentGrowthVisitResponse>,
    /// Only present for parents
    pub vaccines: Option<VaccineSummaryResponse>,
}

/// Liveness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_uses_document_field_names() {
        let mut growth_records = CompletionMap::new();
        growth_records.insert("m1".to_string(), true);

        let record = UserRecord {
            user_id: "uid-1".to_string(),
            role: UserRole::Parent,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
            parent_info: ParentInfo::default(),
            child_info: ChildInfo {
                name: "Sofía".to_string(),
                birth_date: "2023-11-02".to_string(),
                ..Default::default()
            },
            medical_info: MedicalInfo::default(),
            preferences: Preferences::default(),
            growth_records,
            vaccine_records: CompletionMap::new(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["childInfo"]["birthDate"], "2023-11-02");
        assert_eq!(value["growthRecords"]["m1"], true);
        assert!(value["vaccineRecords"].as_object().unwrap().is_empty());
        assert_eq!(value["role"], "parent");
    }

    #[test]
    fn test_user_record_missing_maps_default_to_empty() {
        let json = r#"{
            "userId": "uid-2",
            "createdAt": "2024-01-01T00:00:00+00:00",
            "updatedAt": "2024-01-01T00:00:00+00:00",
            "childInfo": { "birthDate": "2022-05-10" }
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, UserRole::Parent);
        assert_eq!(record.child_info.birth_date, "2022-05-10");
        assert!(record.growth_records.is_empty());
        assert!(record.vaccine_records.is_empty());
    }

    #[test]
    fn test_register_request_ignores_role() {
        let json = r#"{
            "role": "doctor",
            "parentInfo": { "name": "Marta", "email": "marta@example.com" },
            "preferences": { "city": "Cali", "consent": true }
        }"#;

        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.parent_info.name, "Marta");
        assert!(request.preferences.consent);
        assert!(serde_json::to_value(&request).unwrap().get("role").is_none());
    }

    #[test]
    fn test_next_dose_hint_is_tagged() {
        let hint = NextDoseHint::Upcoming {
            dose: VaccineDose {
                id: "ipv_5y".to_string(),
                vaccine: "IPV".to_string(),
                age_label: "5 años".to_string(),
                age_months: 60,
            },
        };
        let value = serde_json::to_value(&hint).unwrap();
        assert_eq!(value["kind"], "upcoming");
        assert_eq!(value["dose"]["id"], "ipv_5y");

        let value = serde_json::to_value(NextDoseHint::UpToDate).unwrap();
        assert_eq!(value["kind"], "up_to_date");
    }
}
