use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::time_entries::adapters::inbound::http::{
    application_error_response, error_response, projection_failed,
};
use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::primitives::{clock_span, now_millis};
use crate::shell::state::AppState;

// A client supplied `duration` is ignored, it is derived from the interval.
#[derive(Deserialize)]
pub struct RegisterTimeEntryBody {
    pub user_id: Option<String>,
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub description: String,
}

/// Entry form shape: a day plus wall clock times.
#[derive(Deserialize)]
pub struct RegisterByClockBody {
    pub user_id: Option<String>,
    pub project_id: String,
    pub task_id: Option<String>,
    pub date: i64,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct RegisterTimeEntryResponse {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let user_id = body
        .user_id
        .unwrap_or_else(|| state.default_employee_id.clone());

    register(
        &state,
        RegisterTimeEntry {
            time_entry_id: Uuid::now_v7().to_string(),
            created_by: user_id.clone(),
            user_id,
            project_id: body.project_id,
            task_id: body.task_id,
            start_time: body.start_time,
            end_time: body.end_time,
            billable: body.billable,
            description: body.description,
            created_at: now_millis(),
        },
    )
    .await
}

pub async fn handle_clock(
    State(state): State<AppState>,
    body: Result<Json<RegisterByClockBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let Some((start_time, end_time)) = clock_span(body.date, &body.start, &body.end) else {
        return error_response(StatusCode::BAD_REQUEST, "start and end must be HH:MM on a supported date");
    };
    let user_id = body
        .user_id
        .unwrap_or_else(|| state.default_employee_id.clone());

    register(
        &state,
        RegisterTimeEntry {
            time_entry_id: Uuid::now_v7().to_string(),
            created_by: user_id.clone(),
            user_id,
            project_id: body.project_id,
            task_id: body.task_id,
            start_time,
            end_time,
            billable: body.billable,
            description: body.description,
            created_at: now_millis(),
        },
    )
    .await
}

async fn register(state: &AppState, command: RegisterTimeEntry) -> axum::response::Response {
    let time_entry_id = command.time_entry_id.clone();
    let stream_id = stream_id_of(&time_entry_id);

    let outcome = state.command_handler.register(&stream_id, command).await;
    if let Err(e) = state.project(&stream_id, &outcome).await {
        return projection_failed(e);
    }
    if let Err(e) = outcome {
        return application_error_response(e);
    }
    tracing::info!(%time_entry_id, "time entry registered");

    (
        StatusCode::CREATED,
        Json(RegisterTimeEntryResponse { time_entry_id }),
    )
        .into_response()
}
