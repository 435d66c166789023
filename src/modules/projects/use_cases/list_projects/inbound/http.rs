use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::projects::core::selection::by_recent_update;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.projects().await {
        Ok(projects) => Json(by_recent_update(projects)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch projects");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch projects" })),
            )
                .into_response()
        }
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.project(&project_id).await {
        Ok(Some(project)) => Json(project).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Project not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, %project_id, "failed to fetch project");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch project" })),
            )
                .into_response()
        }
    }
}
