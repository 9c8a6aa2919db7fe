//! server/src/backend/io/rest/mappers/schedule_mapper.rs

use crate::backend::domain::models::growth_visit::{GrowthCheckpoint, GrowthVisitDefinition};
use crate::backend::domain::models::schedule::{
    CurrentGrowthVisit, DoseStatus as DomainDoseStatus, GrowthCalendar, NextDose, ToggleOutcome,
    VaccineCalendar, VaccineSchedule, VisitStatus,
};
use crate::backend::domain::models::vaccine_dose::VaccineDoseDefinition;
use crate::backend::domain::HomeDashboard;
use shared::{
    CurrentGrowthVisitResponse, DoseStatus, GrowthCalendarEntry, GrowthCalendarResponse,
    GrowthCatalogResponse, GrowthCheckpoint as GrowthCheckpointDto, GrowthCheckpointCatalogResponse,
    GrowthVisit, GrowthVisitStatus, HomeDashboardResponse, NextDoseHint, ToggleRecordResponse,
    VaccineCalendarEntry, VaccineCalendarResponse, VaccineCalendarSection, VaccineCatalogResponse,
    VaccineDose, VaccineSummaryResponse,
};

/// Mapper from resolver results to the shared response DTOs.
pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_growth_visit_dto(visit: &GrowthVisitDefinition) -> GrowthVisit {
        GrowthVisit {
            id: visit.id.to_string(),
            label: visit.label.to_string(),
            age_from_months: visit.age_from_months,
            age_to_months: visit.age_to_months,
            description: visit.description.to_string(),
        }
    }

    pub fn to_growth_checkpoint_dto(checkpoint: &GrowthCheckpoint) -> GrowthCheckpointDto {
        GrowthCheckpointDto {
            id: checkpoint.id.to_string(),
            label: checkpoint.label.to_string(),
            age_months: checkpoint.age_months,
            coverage: checkpoint.coverage.to_string(),
        }
    }

    pub fn to_vaccine_dose_dto(dose: &VaccineDoseDefinition) -> VaccineDose {
        VaccineDose {
            id: dose.id.to_string(),
            vaccine: dose.vaccine.to_string(),
            age_label: dose.age_label.to_string(),
            age_months: dose.age_months,
        }
    }

    pub fn to_growth_catalog_dto(visits: &[GrowthVisitDefinition]) -> GrowthCatalogResponse {
        GrowthCatalogResponse {
            visits: visits.iter().map(Self::to_growth_visit_dto).collect(),
        }
    }

    pub fn to_growth_checkpoint_catalog_dto(
        checkpoints: &[GrowthCheckpoint],
    ) -> GrowthCheckpointCatalogResponse {
        GrowthCheckpointCatalogResponse {
            checkpoints: checkpoints.iter().map(Self::to_growth_checkpoint_dto).collect(),
        }
    }

    pub fn to_vaccine_catalog_dto(doses: &[VaccineDoseDefinition]) -> VaccineCatalogResponse {
        VaccineCatalogResponse {
            doses: doses.iter().map(Self::to_vaccine_dose_dto).collect(),
        }
    }

    pub fn to_current_visit_dto(current: &CurrentGrowthVisit<'_>) -> CurrentGrowthVisitResponse {
        CurrentGrowthVisitResponse {
            age_months: current.age_months,
            visit: current.visit.map(Self::to_growth_visit_dto),
            done: current.done,
            message: current.message().to_string(),
        }
    }

    fn to_visit_status_dto(status: VisitStatus) -> GrowthVisitStatus {
        match status {
            VisitStatus::Done => GrowthVisitStatus::Done,
            VisitStatus::Due => GrowthVisitStatus::Due,
            VisitStatus::Upcoming => GrowthVisitStatus::Upcoming,
            VisitStatus::UnknownAge => GrowthVisitStatus::UnknownAge,
        }
    }

    pub fn to_growth_calendar_dto(calendar: &GrowthCalendar<'_>) -> GrowthCalendarResponse {
        GrowthCalendarResponse {
            age_months: calendar.age_months,
            entries: calendar
                .rows
                .iter()
                .map(|row| GrowthCalendarEntry {
                    checkpoint: Self::to_growth_checkpoint_dto(row.checkpoint),
                    status: Self::to_visit_status_dto(row.status),
                    status_message: row.status.message().to_string(),
                })
                .collect(),
        }
    }

    fn to_next_dose_dto(next_dose: &NextDose<'_>) -> NextDoseHint {
        match next_dose {
            NextDose::BirthDateRequired => NextDoseHint::BirthDateRequired,
            NextDose::Upcoming(dose) => NextDoseHint::Upcoming {
                dose: Self::to_vaccine_dose_dto(dose),
            },
            NextDose::UpToDate => NextDoseHint::UpToDate,
            NextDose::PendingForCurrentAge => NextDoseHint::PendingForCurrentAge,
        }
    }

    pub fn to_vaccine_summary_dto(schedule: &VaccineSchedule<'_>) -> VaccineSummaryResponse {
        VaccineSummaryResponse {
            age_months: schedule.age_months,
            total_due: schedule.total_due(),
            completed: schedule.completed_count(),
            pending: schedule.pending_count(),
            completed_doses: schedule
                .completed
                .iter()
                .map(|dose| Self::to_vaccine_dose_dto(dose))
                .collect(),
            pending_doses: schedule
                .pending
                .iter()
                .map(|dose| Self::to_vaccine_dose_dto(dose))
                .collect(),
            next_dose: Self::to_next_dose_dto(&schedule.next_dose),
            next_dose_description: schedule.next_dose.description(),
        }
    }

    fn to_dose_status_dto(status: DomainDoseStatus) -> DoseStatus {
        match status {
            DomainDoseStatus::Applied => DoseStatus::Applied,
            DomainDoseStatus::Needed => DoseStatus::Needed,
            DomainDoseStatus::Planned => DoseStatus::Planned,
            DomainDoseStatus::UnknownAge => DoseStatus::UnknownAge,
        }
    }

    pub fn to_vaccine_calendar_dto(calendar: &VaccineCalendar<'_>) -> VaccineCalendarResponse {
        VaccineCalendarResponse {
            age_months: calendar.age_months,
            sections: calendar
                .sections
                .iter()
                .map(|section| VaccineCalendarSection {
                    title: section.title.to_string(),
                    age_months: section.age_months,
                    entries: section
                        .rows
                        .iter()
                        .map(|(dose, status)| VaccineCalendarEntry {
                            dose: Self::to_vaccine_dose_dto(dose),
                            status: Self::to_dose_status_dto(*status),
                            status_message: status.message().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn to_toggle_dto(outcome: ToggleOutcome) -> ToggleRecordResponse {
        let success_message = if outcome.done {
            format!("{} marked as done.", outcome.id)
        } else {
            format!("{} marked as not done.", outcome.id)
        };
        ToggleRecordResponse {
            id: outcome.id,
            done: outcome.done,
            success_message,
        }
    }

    pub fn to_home_dto(dashboard: HomeDashboard) -> HomeDashboardResponse {
        HomeDashboardResponse {
            growth: dashboard.growth.as_ref().map(Self::to_current_visit_dto),
            vaccines: dashboard.vaccines.as_ref().map(Self::to_vaccine_summary_dto),
            user_id: dashboard.user_id,
            role: dashboard.role,
            child_name: dashboard.child_name,
            age_months: dashboard.age_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::catalog::{GROWTH_CHECKPOINTS, GROWTH_VISITS, VACCINE_DOSES};
    use crate::backend::domain::growth_schedule::growth_calendar;
    use crate::backend::domain::models::user_record::CompletionRecords;
    use crate::backend::domain::vaccine_schedule::resolve_vaccine_schedule;

    #[test]
    fn test_vaccine_summary_dto_counts_and_hint() {
        let mut records = CompletionRecords::new();
        records.toggle("bcg_birth");
        let schedule = resolve_vaccine_schedule(Some(2), VACCINE_DOSES, &records);

        let dto = ScheduleMapper::to_vaccine_summary_dto(&schedule);

        assert_eq!(dto.total_due, 6);
        assert_eq!(dto.completed, 1);
        assert_eq!(dto.pending, 5);
        assert_eq!(dto.completed_doses[0].id, "bcg_birth");
        assert_eq!(dto.next_dose_description, "Rotavirus (2 meses)");
        assert!(matches!(dto.next_dose, NextDoseHint::Upcoming { ref dose } if dose.id == "rota_2m"));
    }

    #[test]
    fn test_current_visit_dto_without_age() {
        let current = CurrentGrowthVisit {
            age_months: None,
            visit: None,
            done: false,
        };
        let dto = ScheduleMapper::to_current_visit_dto(&current);
        assert!(dto.visit.is_none());
        assert!(dto.message.contains("birth date"));
    }

    #[test]
    fn test_growth_catalog_dto_keeps_order() {
        let dto = ScheduleMapper::to_growth_catalog_dto(GROWTH_VISITS);
        assert_eq!(dto.visits.len(), GROWTH_VISITS.len());
        assert_eq!(dto.visits[0].id, "newborn");
        assert_eq!(dto.visits.last().map(|v| v.age_to_months), Some(120));
    }

    #[test]
    fn test_growth_calendar_dto_carries_checkpoint_and_status() {
        let mut records = CompletionRecords::new();
        records.toggle("age_15m");
        let calendar = growth_calendar(Some(15), GROWTH_CHECKPOINTS, &records);

        let dto = ScheduleMapper::to_growth_calendar_dto(&calendar);

        assert_eq!(dto.age_months, Some(15));
        assert_eq!(dto.entries.len(), GROWTH_CHECKPOINTS.len());
        let entry = dto.entries.iter().find(|e| e.checkpoint.id == "age_15m").unwrap();
        assert_eq!(entry.checkpoint.label, "15 meses");
        assert_eq!(entry.status, GrowthVisitStatus::Done);
        assert_eq!(entry.status_message, "Visit done.");
    }

    #[test]
    fn test_toggle_dto_message() {
        let dto = ScheduleMapper::to_toggle_dto(ToggleOutcome {
            id: "m3".to_string(),
            done: false,
        });
        assert!(!dto.done);
        assert_eq!(dto.success_message, "m3 marked as not done.");
    }
}
