use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::adapters::inbound::http::{
    application_error_response, projection_failed,
};
use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
) -> impl IntoResponse {
    let stream_id = stream_id_of(&time_entry_id);
    let command = DeleteTimeEntry {
        time_entry_id: time_entry_id.clone(),
        deleted_at: now_millis(),
        deleted_by: state.default_employee_id.clone(),
    };

    let outcome = state.command_handler.delete(&stream_id, command).await;
    if let Err(e) = state.project(&stream_id, &outcome).await {
        return projection_failed(e);
    }
    if let Err(e) = outcome {
        return application_error_response(e);
    }
    tracing::info!(%time_entry_id, "time entry deleted");
    StatusCode::NO_CONTENT.into_response()
}
