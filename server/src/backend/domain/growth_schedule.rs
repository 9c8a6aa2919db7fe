//! Growth-visit resolution.
//!
//! The current visit comes from the age-range catalog; the calendar view
//! lists the per-age checkpoints. Both are pure functions of (age, catalog,
//! completion map) and callers recompute them on every read, so a toggle is
//! reflected immediately.

use super::models::growth_visit::{GrowthCheckpoint, GrowthVisitDefinition};
use super::models::schedule::{CurrentGrowthVisit, GrowthCalendar, GrowthCalendarRow, VisitStatus};
use super::models::user_record::CompletionRecords;

/// First visit in catalog order whose inclusive range contains `age_months`.
/// Unknown age never matches.
pub fn resolve_current_visit<'a>(
    age_months: Option<u32>,
    visits: &'a [GrowthVisitDefinition],
    records: &CompletionRecords,
) -> CurrentGrowthVisit<'a> {
    let visit = age_months.and_then(|age| visits.iter().find(|visit| visit.covers_age(age)));
    let done = visit.map(|visit| records.is_done(visit.id)).unwrap_or(false);

    CurrentGrowthVisit {
        age_months,
        visit,
        done,
    }
}

pub fn checkpoint_status(
    checkpoint: &GrowthCheckpoint,
    age_months: Option<u32>,
    records: &CompletionRecords,
) -> VisitStatus {
    if records.is_done(checkpoint.id) {
        return VisitStatus::Done;
    }
    match age_months {
        Some(age) if age >= checkpoint.age_months => VisitStatus::Due,
        Some(_) => VisitStatus::Upcoming,
        None => VisitStatus::UnknownAge,
    }
}

/// Every checkpoint ordered by age, each with its status
pub fn growth_calendar<'a>(
    age_months: Option<u32>,
    checkpoints: &'a [GrowthCheckpoint],
    records: &CompletionRecords,
) -> GrowthCalendar<'a> {
    let mut rows: Vec<GrowthCalendarRow<'a>> = checkpoints
        .iter()
        .map(|checkpoint| GrowthCalendarRow {
            checkpoint,
            status: checkpoint_status(checkpoint, age_months, records),
        })
        .collect();
    rows.sort_by_key(|row| row.checkpoint.age_months);

    GrowthCalendar { age_months, rows }
}
