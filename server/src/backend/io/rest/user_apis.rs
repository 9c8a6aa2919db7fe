//! # REST API for User Records
//!
//! Endpoints for registering a user, reading the stored document and
//! updating the child or parent information.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::errors::error_response;
use super::mappers::UserRecordMapper;
use crate::backend::AppState;
use shared::{RegisterUserRequest, UpdateChildInfoRequest, UpdateParentInfoRequest};

/// Register a new user document
pub async fn register_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<RegisterUserRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/{} - request: {:?}", user_id, request);

    let command = UserRecordMapper::to_register_command(user_id, request);
    match state.user_service.register_user(command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(UserRecordMapper::to_user_response_dto(record, "User registered successfully")),
        )
            .into_response(),
        Err(e) => error_response("Failed to register user", e),
    }
}

/// Get a user document by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}", user_id);

    match state.user_service.get_user(&user_id).await {
        Ok(record) => (StatusCode::OK, Json(UserRecordMapper::to_dto(record))).into_response(),
        Err(e) => error_response("Failed to get user", e),
    }
}

/// Update the child information of a user document
pub async fn update_child_info(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateChildInfoRequest>,
) -> impl IntoResponse {
    info!("PUT /api/users/{}/child - request: {:?}", user_id, request);

    let command = UserRecordMapper::to_update_child_command(user_id, request);
    match state.user_service.update_child_info(command).await {
        Ok(record) => (
            StatusCode::OK,
            Json(UserRecordMapper::to_user_response_dto(record, "Child information updated successfully")),
        )
            .into_response(),
        Err(e) => error_response("Failed to update child info", e),
    }
}

/// Update the parent's contact details and preferences
pub async fn update_parent_info(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateParentInfoRequest>,
) -> impl IntoResponse {
    info!("PUT /api/users/{}/parent - request: {:?}", user_id, request);

    let command = UserRecordMapper::to_update_parent_command(user_id, request);
    match state.user_service.update_parent_info(command).await {
        Ok(record) => (
            StatusCode::OK,
            Json(UserRecordMapper::to_user_response_dto(record, "Parent information updated successfully")),
        )
            .into_response(),
        Err(e) => error_response("Failed to update parent info", e),
    }
}
