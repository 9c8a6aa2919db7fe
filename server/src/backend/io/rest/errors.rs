//! Translation of domain failures into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};

use crate::backend::domain::models::schedule::ScheduleError;
use crate::backend::domain::models::user_record::UserRecordError;

/// Pick the status code for an error coming out of a domain service
pub fn status_for(err: &anyhow::Error) -> StatusCode {
    if let Some(record_error) = err.downcast_ref::<UserRecordError>() {
        return match record_error {
            UserRecordError::NotFound(_) => StatusCode::NOT_FOUND,
            UserRecordError::AlreadyRegistered(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
    }

    if err.downcast_ref::<ScheduleError>().is_some() {
        return StatusCode::NOT_FOUND;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Log the failure and turn it into a plain-text response
pub fn error_response(context: &str, err: anyhow::Error) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!("{}: {:#}", context, err);
        (status, "Internal storage error").into_response()
    } else {
        warn!("{}: {}", context, err);
        (status, err.to_string()).into_response()
    }
}
