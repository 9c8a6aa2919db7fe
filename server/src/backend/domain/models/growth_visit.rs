//! server/src/backend/domain/models/growth_visit.rs

/// Growth and development check-up from the static catalog.
/// The age range is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthVisitDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub age_from_months: u32,
    pub age_to_months: u32,
    pub description: &'static str,
}

impl GrowthVisitDefinition {
    /// Whether a child of `age_months` falls inside this visit's range
    pub fn covers_age(&self, age_months: u32) -> bool {
        age_months >= self.age_from_months && age_months <= self.age_to_months
    }
}

/// Single check-up point of the growth and development calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthCheckpoint {
    pub id: &'static str,
    pub label: &'static str,
    pub age_months: u32,
    /// What the visit should cover
    pub coverage: &'static str,
}
