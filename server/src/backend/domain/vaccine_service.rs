use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use super::age::age_in_months;
use super::catalog::{find_vaccine_dose, vaccine_doses};
use super::clock::Clock;
use super::models::schedule::{ScheduleError, ToggleOutcome, VaccineCalendar, VaccineSchedule};
use super::models::user_record::UserRecord;
use super::record_store::RecordStore;
use super::vaccine_schedule::{resolve_vaccine_schedule, vaccine_calendar};

/// Vaccination schedule views for one child
#[derive(Clone)]
pub struct VaccineService {
    store: RecordStore,
    clock: Arc<dyn Clock>,
}

impl VaccineService {
    pub fn new(store: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn vaccine_summary(&self, user_id: &str) -> Result<VaccineSchedule<'static>> {
        let record = self.store.load(user_id).await?;
        Ok(self.vaccine_summary_for(&record))
    }

    /// Summary for an already loaded record
    pub fn vaccine_summary_for(&self, record: &UserRecord) -> VaccineSchedule<'static> {
        let age_months = age_in_months(record.birth_date(), self.clock.today());
        resolve_vaccine_schedule(age_months, vaccine_doses(), &record.vaccine_records)
    }

    pub async fn vaccine_calendar(&self, user_id: &str) -> Result<VaccineCalendar<'static>> {
        let record = self.store.load(user_id).await?;
        let age_months = age_in_months(record.birth_date(), self.clock.today());
        Ok(vaccine_calendar(age_months, &record.vaccine_records))
    }

    /// Flip the applied flag of one catalog dose
    pub async fn toggle_dose(&self, user_id: &str, dose_id: &str) -> Result<ToggleOutcome> {
        info!("Toggling vaccine dose {} for user {}", dose_id, user_id);

        let dose = find_vaccine_dose(dose_id).ok_or_else(|| {
            warn!("Rejected toggle of unknown vaccine dose {}", dose_id);
            ScheduleError::UnknownVaccineDose(dose_id.to_string())
        })?;

        let (_, done) = self
            .store
            .update(user_id, |record| Ok(record.vaccine_records.toggle(dose.id)))
            .await?;

        info!("💉 Vaccine dose {} for user {} is now done={}", dose.id, user_id, done);
        Ok(ToggleOutcome {
            id: dose.id.to_string(),
            done,
        })
    }
}
