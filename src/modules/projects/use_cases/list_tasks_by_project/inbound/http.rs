use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::projects::core::selection::by_newest;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    if project_id.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "project_id is required" })),
        )
            .into_response();
    }
    match state.catalog.tasks_of(&project_id).await {
        Ok(tasks) => Json(by_newest(tasks)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %project_id, "failed to fetch tasks");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch tasks" })),
            )
                .into_response()
        }
    }
}
