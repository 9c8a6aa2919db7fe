//! Vaccine-schedule resolution.
//!
//! Doses are not range bound: a dose is due once the child's age reaches its
//! due age. The due-by-now set is partitioned into completed and pending; the
//! next-dose hint looks at the whole catalog independently of that partition.

use super::catalog::VACCINE_DOSE_GROUPS;
use super::models::schedule::{DoseStatus, NextDose, VaccineCalendar, VaccineSchedule, VaccineSection};
use super::models::user_record::CompletionRecords;
use super::models::vaccine_dose::VaccineDoseDefinition;

pub fn resolve_vaccine_schedule<'a>(
    age_months: Option<u32>,
    doses: &'a [VaccineDoseDefinition],
    records: &CompletionRecords,
) -> VaccineSchedule<'a> {
    let mut by_due_age: Vec<&'a VaccineDoseDefinition> = doses.iter().collect();
    by_due_age.sort_by_key(|dose| dose.age_months);

    let Some(age) = age_months else {
        return VaccineSchedule {
            age_months: None,
            completed: Vec::new(),
            pending: Vec::new(),
            next_dose: NextDose::BirthDateRequired,
        };
    };

    let (completed, pending): (Vec<_>, Vec<_>) = by_due_age
        .iter()
        .copied()
        .filter(|dose| dose.is_due_at(age))
        .partition(|dose| records.is_done(dose.id));

    VaccineSchedule {
        age_months,
        completed,
        pending,
        next_dose: next_dose(age, &by_due_age, records),
    }
}

fn next_dose<'a>(
    age: u32,
    by_due_age: &[&'a VaccineDoseDefinition],
    records: &CompletionRecords,
) -> NextDose<'a> {
    let mut not_done = by_due_age
        .iter()
        .copied()
        .filter(|dose| !records.is_done(dose.id))
        .peekable();

    if not_done.peek().is_none() {
        return NextDose::UpToDate;
    }

    match not_done.find(|dose| dose.age_months >= age) {
        Some(dose) => NextDose::Upcoming(dose),
        None => NextDose::PendingForCurrentAge,
    }
}

pub fn dose_status(
    dose: &VaccineDoseDefinition,
    age_months: Option<u32>,
    records: &CompletionRecords,
) -> DoseStatus {
    if records.is_done(dose.id) {
        return DoseStatus::Applied;
    }
    match age_months {
        Some(age) if dose.is_due_at(age) => DoseStatus::Needed,
        Some(_) => DoseStatus::Planned,
        None => DoseStatus::UnknownAge,
    }
}

/// The catalog grouped by due age, each dose with its status
pub fn vaccine_calendar(
    age_months: Option<u32>,
    records: &CompletionRecords,
) -> VaccineCalendar<'static> {
    let sections = VACCINE_DOSE_GROUPS
        .iter()
        .map(|group| VaccineSection {
            title: group.title,
            age_months: group.age_months,
            rows: group
                .doses
                .iter()
                .map(|dose| (*dose, dose_status(dose, age_months, records)))
                .collect(),
        })
        .collect();

    VaccineCalendar {
        age_months,
        sections,
    }
}
