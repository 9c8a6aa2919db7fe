//! # REST API for the Vaccination Schedule

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::errors::error_response;
use super::mappers::ScheduleMapper;
use crate::backend::AppState;

/// Due-by-now counts and the next-dose hint
pub async fn get_vaccine_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/vaccines/summary", user_id);

    match state.vaccine_service.vaccine_summary(&user_id).await {
        Ok(schedule) => {
            (StatusCode::OK, Json(ScheduleMapper::to_vaccine_summary_dto(&schedule))).into_response()
        }
        Err(e) => error_response("Failed to build vaccine summary", e),
    }
}

/// Full dose calendar grouped by due age
pub async fn get_vaccine_calendar(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/vaccines", user_id);

    match state.vaccine_service.vaccine_calendar(&user_id).await {
        Ok(calendar) => {
            (StatusCode::OK, Json(ScheduleMapper::to_vaccine_calendar_dto(&calendar))).into_response()
        }
        Err(e) => error_response("Failed to build vaccine calendar", e),
    }
}

pub async fn toggle_vaccine_dose(
    State(state): State<AppState>,
    Path((user_id, dose_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("POST /api/users/{}/vaccines/{}/toggle", user_id, dose_id);

    match state.vaccine_service.toggle_dose(&user_id, &dose_id).await {
        Ok(outcome) => (StatusCode::OK, Json(ScheduleMapper::to_toggle_dto(outcome))).into_response(),
        Err(e) => error_response("Failed to toggle vaccine dose", e),
    }
}
