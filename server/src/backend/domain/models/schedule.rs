//! server/src/backend/domain/models/schedule.rs
//!
//! Results of the growth-visit and vaccine-schedule resolvers. All of these
//! are derived on every read from (birth date, today, completion map) and are
//! never stored.

use super::growth_visit::{GrowthCheckpoint, GrowthVisitDefinition};
use super::vaccine_dose::VaccineDoseDefinition;

pub const BIRTH_DATE_REQUIRED_MESSAGE: &str =
    "Register the birth date in the profile to see the schedule.";

/// Growth visit whose range contains the child's current age
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentGrowthVisit<'a> {
    pub age_months: Option<u32>,
    pub visit: Option<&'a GrowthVisitDefinition>,
    pub done: bool,
}

impl CurrentGrowthVisit<'_> {
    pub fn message(&self) -> &'static str {
        match (self.age_months, self.visit) {
            (None, _) => BIRTH_DATE_REQUIRED_MESSAGE,
            (Some(_), None) => "No growth visit is defined for this age.",
            (Some(_), Some(_)) if self.done => "You marked this visit as done.",
            (Some(_), Some(_)) => "Remember to book your growth and development visit.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    Done,
    /// The child has reached the checkpoint age
    Due,
    Upcoming,
    UnknownAge,
}

impl VisitStatus {
    pub fn message(&self) -> &'static str {
        match self {
            VisitStatus::Done => "Visit done.",
            VisitStatus::Due => "Remember to book your growth and development visit.",
            VisitStatus::Upcoming => "Scheduled for later.",
            VisitStatus::UnknownAge => "Complete the birth date to see the reminders.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCalendarRow<'a> {
    pub checkpoint: &'a GrowthCheckpoint,
    pub status: VisitStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCalendar<'a> {
    pub age_months: Option<u32>,
    pub rows: Vec<GrowthCalendarRow<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextDose<'a> {
    BirthDateRequired,
    Upcoming(&'a VaccineDoseDefinition),
    UpToDate,
    PendingForCurrentAge,
}

impl NextDose<'_> {
    pub fn description(&self) -> String {
        match self {
            NextDose::BirthDateRequired => BIRTH_DATE_REQUIRED_MESSAGE.to_string(),
            NextDose::Upcoming(dose) => format!("{} ({})", dose.vaccine, dose.age_label),
            NextDose::UpToDate => "Schedule up to date according to this calendar.".to_string(),
            NextDose::PendingForCurrentAge => {
                "No further doses are defined for this age, but some are still pending. Review the schedule."
                    .to_string()
            }
        }
    }
}

/// Due-by-now partition of the vaccine catalog plus the next-dose hint
#[derive(Debug, Clone, PartialEq)]
pub struct VaccineSchedule<'a> {
    pub age_months: Option<u32>,
    pub completed: Vec<&'a VaccineDoseDefinition>,
    pub pending: Vec<&'a VaccineDoseDefinition>,
    pub next_dose: NextDose<'a>,
}

impl VaccineSchedule<'_> {
    pub fn total_due(&self) -> usize {
        self.completed.len() + self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn pending_count(&self) -> usize {
        self.total_due() - self.completed_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseStatus {
    Applied,
    Needed,
    Planned,
    UnknownAge,
}

impl DoseStatus {
    pub fn message(&self) -> &'static str {
        match self {
            DoseStatus::Applied => "Applied",
            DoseStatus::Needed => "VACCINE NEEDED",
            DoseStatus::Planned => "Scheduled for later",
            DoseStatus::UnknownAge => "No age information",
        }
    }
}

/// Doses sharing one due age, titled with the first dose's age label
#[derive(Debug, Clone, PartialEq)]
pub struct VaccineSection<'a> {
    pub title: &'a str,
    pub age_months: u32,
    pub rows: Vec<(&'a VaccineDoseDefinition, DoseStatus)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VaccineCalendar<'a> {
    pub age_months: Option<u32>,
    pub sections: Vec<VaccineSection<'a>>,
}

/// Outcome of flipping one completion flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub id: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Unknown growth visit: {0}")]
    UnknownGrowthVisit(String),
    #[error("Unknown vaccine dose: {0}")]
    UnknownVaccineDose(String),
    #[error("No growth visit matches the child's current age")]
    NoCurrentGrowthVisit,
}
