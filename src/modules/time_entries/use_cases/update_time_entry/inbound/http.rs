use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::{
    application_error_response, error_response, projection_failed,
};
use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTimeEntryBody {
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub description: String,
    pub updated_by: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    body: Result<Json<UpdateTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let stream_id = stream_id_of(&time_entry_id);
    let command = UpdateTimeEntry {
        time_entry_id: time_entry_id.clone(),
        project_id: body.project_id,
        task_id: body.task_id,
        start_time: body.start_time,
        end_time: body.end_time,
        billable: body.billable,
        description: body.description,
        updated_at: now_millis(),
        updated_by: body
            .updated_by
            .unwrap_or_else(|| state.default_employee_id.clone()),
    };

    let outcome = state.command_handler.update(&stream_id, command).await;
    if let Err(e) = state.project(&stream_id, &outcome).await {
        return projection_failed(e);
    }
    if let Err(e) = outcome {
        return application_error_response(e);
    }

    match state.queries.get_by_id(&time_entry_id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "time entry not found"),
        Err(e) => projection_failed(e),
    }
}
