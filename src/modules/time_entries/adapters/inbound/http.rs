// Shared HTTP plumbing for the time entry use cases.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::DecideError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Unknown or deleted entries are 404, other domain rejections 409, the rest 500.
pub fn application_error_response(error: ApplicationError) -> Response {
    match &error {
        ApplicationError::Domain(DecideError::NotFound | DecideError::Deleted) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        ApplicationError::Domain(_) => error_response(StatusCode::CONFLICT, error.to_string()),
        _ => {
            tracing::error!(%error, "time entry command failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn projection_failed(error: anyhow::Error) -> Response {
    tracing::error!(%error, "inline projection failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
