//! # REST API for the Static Catalogs
//!
//! Read-only endpoints exposing the growth-visit, growth-checkpoint and
//! vaccine-dose tables, plus the liveness probe.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::mappers::ScheduleMapper;
use crate::backend::domain::catalog::{growth_checkpoints, growth_visits, vaccine_doses};
use shared::HealthResponse;

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// List every growth visit in catalog order
pub async fn list_growth_visits() -> impl IntoResponse {
    info!("GET /api/catalog/growth-visits");
    (StatusCode::OK, Json(ScheduleMapper::to_growth_catalog_dto(growth_visits())))
}

/// List every growth calendar checkpoint ordered by age
pub async fn list_growth_checkpoints() -> impl IntoResponse {
    info!("GET /api/catalog/growth-checkpoints");
    (
        StatusCode::OK,
        Json(ScheduleMapper::to_growth_checkpoint_catalog_dto(growth_checkpoints())),
    )
}

/// List every vaccine dose in catalog order
pub async fn list_vaccine_doses() -> impl IntoResponse {
    info!("GET /api/catalog/vaccine-doses");
    (StatusCode::OK, Json(ScheduleMapper::to_vaccine_catalog_dto(vaccine_doses())))
}
