use anyhow::Result;
use log::info;

use super::growth_service::GrowthService;
use super::models::schedule::{CurrentGrowthVisit, VaccineSchedule};
use super::models::user_record::UserRole;
use super::record_store::RecordStore;
use super::vaccine_service::VaccineService;

/// Landing view: the child's age plus the growth and vaccine cards.
/// Doctor accounts get the header only.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeDashboard {
    pub user_id: String,
    pub role: UserRole,
    pub child_name: String,
    pub age_months: Option<u32>,
    pub growth: Option<CurrentGrowthVisit<'static>>,
    pub vaccines: Option<VaccineSchedule<'static>>,
}

#[derive(Clone)]
pub struct HomeService {
    store: RecordStore,
    growth_service: GrowthService,
    vaccine_service: VaccineService,
}

impl HomeService {
    pub fn new(
        store: RecordStore,
        growth_service: GrowthService,
        vaccine_service: VaccineService,
    ) -> Self {
        Self {
            store,
            growth_service,
            vaccine_service,
        }
    }

    pub async fn dashboard(&self, user_id: &str) -> Result<HomeDashboard> {
        info!("Building home dashboard for user {}", user_id);

        // One load so both cards see the same snapshot
        let record = self.store.load(user_id).await?;

        if !record.is_parent() {
            return Ok(HomeDashboard {
                user_id: record.user_id,
                role: record.role,
                child_name: record.child_info.name,
                age_months: None,
                growth: None,
                vaccines: None,
            });
        }

        let growth = self.growth_service.current_visit_for(&record);
        let vaccines = self.vaccine_service.vaccine_summary_for(&record);

        Ok(HomeDashboard {
            age_months: growth.age_months,
            growth: Some(growth),
            vaccines: Some(vaccines),
            user_id: record.user_id,
            role: record.role,
            child_name: record.child_info.name,
        })
    }
}
