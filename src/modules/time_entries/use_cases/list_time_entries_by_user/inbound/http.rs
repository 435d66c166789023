use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub employee_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeEntriesParams>,
) -> impl IntoResponse {
    if params.employee_id.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "employee_id is required");
    }
    match state
        .queries
        .list_by_user_id(
            &params.employee_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch time entries");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch time entries")
        }
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.get_by_id(&time_entry_id).await {
        Ok(Some(entry)) => Json(entry).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "time entry not found"),
        Err(e) => {
            tracing::error!(error = %e, %time_entry_id, "failed to fetch time entry");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
