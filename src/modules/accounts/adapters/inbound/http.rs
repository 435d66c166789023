// Responses of the accounts API carry their status inside the body as well:
// `{ "status": 200, "message": "...", "<resource>": ... }`.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::modules::accounts::core::rules::AccountsError;

pub fn envelope(
    status: StatusCode,
    message: Option<&str>,
    payload: Option<(&str, impl Serialize)>,
) -> Response {
    let mut body = Map::new();
    body.insert("status".into(), json!(status.as_u16()));
    if let Some(message) = message {
        body.insert("message".into(), json!(message));
    }
    if let Some((key, value)) = payload {
        match serde_json::to_value(value) {
            Ok(value) => {
                body.insert(key.to_string(), value);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }
    (status, Json(Value::Object(body))).into_response()
}

pub fn message(status: StatusCode, message: &str) -> Response {
    envelope(status, Some(message), None::<(&str, ())>)
}

pub fn accounts_error_response(error: AccountsError) -> Response {
    let status = match error {
        AccountsError::EmailTaken | AccountsError::Validation(_) => StatusCode::BAD_REQUEST,
        AccountsError::UserNotFound | AccountsError::PostNotFound => StatusCode::NOT_FOUND,
        AccountsError::Backend(_) => {
            tracing::error!(%error, "accounts repository failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    message(status, &error.to_string())
}
