//! # REST API for the Home Dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::errors::error_response;
use super::mappers::ScheduleMapper;
use crate::backend::AppState;

pub async fn get_home_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/home", user_id);

    match state.home_service.dashboard(&user_id).await {
        Ok(dashboard) => (StatusCode::OK, Json(ScheduleMapper::to_home_dto(dashboard))).into_response(),
        Err(e) => error_response("Failed to build home dashboard", e),
    }
}
