// server/src/backend/domain/commands.rs

//! Domain-level command types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod users {
    use crate::backend::domain::models::user_record::{
        ChildInfo, MedicalInfo, ParentInfo, Preferences,
    };

    /// Input for registering a new parent account.
    #[derive(Debug, Clone)]
    pub struct RegisterUserCommand {
        pub user_id: String,
        pub parent_info: ParentInfo,
        pub child_info: ChildInfo,
        pub medical_info: MedicalInfo,
        pub preferences: Preferences,
    }

    /// Partial update of the child information; `None` leaves a field as is.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateChildInfoCommand {
        pub user_id: String,
        pub name: Option<String>,
        pub birth_date: Option<String>,
        pub sex: Option<String>,
        pub weight: Option<String>,
        pub blood_type: Option<String>,
        pub history_code: Option<String>,
    }

    /// Partial update of the parent's contact details and preferences.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateParentInfoCommand {
        pub user_id: String,
        pub name: Option<String>,
        pub phone: Option<String>,
        pub age: Option<String>,
        pub city: Option<String>,
        pub language: Option<String>,
    }
}
