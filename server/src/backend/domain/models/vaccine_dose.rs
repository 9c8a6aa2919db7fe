//! server/src/backend/domain/models/vaccine_dose.rs

/// A single dose of a named vaccine, due once the child reaches `age_months`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineDoseDefinition {
    pub id: &'static str,
    pub vaccine: &'static str,
    pub age_label: &'static str,
    pub age_months: u32,
}

impl VaccineDoseDefinition {
    pub fn is_due_at(&self, age_months: u32) -> bool {
        self.age_months <= age_months
    }
}
