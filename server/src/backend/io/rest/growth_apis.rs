//! # REST API for Growth Visits

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::errors::error_response;
use super::mappers::ScheduleMapper;
use crate::backend::AppState;

/// Growth visit matching the child's age today
pub async fn get_current_growth_visit(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/growth/current", user_id);

    match state.growth_service.current_visit(&user_id).await {
        Ok(current) => {
            (StatusCode::OK, Json(ScheduleMapper::to_current_visit_dto(&current))).into_response()
        }
        Err(e) => error_response("Failed to resolve current growth visit", e),
    }
}

/// Every growth visit with its status
pub async fn get_growth_calendar(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/growth", user_id);

    match state.growth_service.growth_calendar(&user_id).await {
        Ok(calendar) => {
            (StatusCode::OK, Json(ScheduleMapper::to_growth_calendar_dto(&calendar))).into_response()
        }
        Err(e) => error_response("Failed to build growth calendar", e),
    }
}

pub async fn toggle_current_growth_visit(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/users/{}/growth/current/toggle", user_id);

    match state.growth_service.toggle_current_visit(&user_id).await {
        Ok(outcome) => (StatusCode::OK, Json(ScheduleMapper::to_toggle_dto(outcome))).into_response(),
        Err(e) => error_response("Failed to toggle current growth visit", e),
    }
}

pub async fn toggle_growth_visit(
    State(state): State<AppState>,
    Path((user_id, visit_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("POST /api/users/{}/growth/{}/toggle", user_id, visit_id);

    match state.growth_service.toggle_visit(&user_id, &visit_id).await {
        Ok(outcome) => (StatusCode::OK, Json(ScheduleMapper::to_toggle_dto(outcome))).into_response(),
        Err(e) => error_response("Failed to toggle growth visit", e),
    }
}
