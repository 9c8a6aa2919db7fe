use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use super::age::age_in_months;
use super::catalog::{find_growth_checkpoint, find_growth_visit, growth_checkpoints, growth_visits};
use super::clock::Clock;
use super::growth_schedule::{growth_calendar, resolve_current_visit};
use super::models::schedule::{CurrentGrowthVisit, GrowthCalendar, ScheduleError, ToggleOutcome};
use super::models::user_record::UserRecord;
use super::record_store::RecordStore;

/// Growth and development visit views for one child
#[derive(Clone)]
pub struct GrowthService {
    store: RecordStore,
    clock: Arc<dyn Clock>,
}

impl GrowthService {
    pub fn new(store: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn current_visit(&self, user_id: &str) -> Result<CurrentGrowthVisit<'static>> {
        let record = self.store.load(user_id).await?;
        Ok(self.current_visit_for(&record))
    }

    /// Current visit for an already loaded record
    pub fn current_visit_for(&self, record: &UserRecord) -> CurrentGrowthVisit<'static> {
        let age_months = age_in_months(record.birth_date(), self.clock.today());
        resolve_current_visit(age_months, growth_visits(), &record.growth_records)
    }

    pub async fn growth_calendar(&self, user_id: &str) -> Result<GrowthCalendar<'static>> {
        let record = self.store.load(user_id).await?;
        let age_months = age_in_months(record.birth_date(), self.clock.today());
        Ok(growth_calendar(age_months, growth_checkpoints(), &record.growth_records))
    }

    /// Flip the done flag of an age-range visit or a calendar checkpoint
    pub async fn toggle_visit(&self, user_id: &str, visit_id: &str) -> Result<ToggleOutcome> {
        info!("Toggling growth visit {} for user {}", visit_id, user_id);

        let id = find_growth_visit(visit_id)
            .map(|visit| visit.id)
            .or_else(|| find_growth_checkpoint(visit_id).map(|checkpoint| checkpoint.id))
            .ok_or_else(|| {
                warn!("Rejected toggle of unknown growth visit {}", visit_id);
                ScheduleError::UnknownGrowthVisit(visit_id.to_string())
            })?;

        let (_, done) = self
            .store
            .update(user_id, |record| Ok(record.growth_records.toggle(id)))
            .await?;

        info!("✅ Growth visit {} for user {} is now done={}", id, user_id, done);
        Ok(ToggleOutcome {
            id: id.to_string(),
            done,
        })
    }

    /// Flip the done flag of the visit matching the child's age today
    pub async fn toggle_current_visit(&self, user_id: &str) -> Result<ToggleOutcome> {
        info!("Toggling current growth visit for user {}", user_id);

        let today = self.clock.today();
        let (_, outcome) = self
            .store
            .update(user_id, |record| {
                let age_months = age_in_months(record.birth_date(), today);
                let current = resolve_current_visit(age_months, growth_visits(), &record.growth_records);
                let visit = current.visit.ok_or(ScheduleError::NoCurrentGrowthVisit)?;
                let done = record.growth_records.toggle(visit.id);
                Ok(ToggleOutcome {
                    id: visit.id.to_string(),
                    done,
                })
            })
            .await?;

        info!("✅ Growth visit {} for user {} is now done={}", outcome.id, user_id, outcome.done);
        Ok(outcome)
    }
}
