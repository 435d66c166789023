use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::accounts::adapters::inbound::http::{
    accounts_error_response, envelope, message,
};
use crate::modules::accounts::core::model::NewComment;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewComment>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.accounts.create_comment(new).await {
        Ok(_) => message(StatusCode::OK, "comment created."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.accounts.comment(&id).await {
        Ok(Some(comment)) => envelope(StatusCode::OK, None, Some(("comment", comment))),
        Ok(None) => message(StatusCode::NOT_FOUND, "Comment not found."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.accounts.comments().await {
        Ok(comments) => envelope(
            StatusCode::OK,
            Some("All comments"),
            Some(("comments", comments)),
        ),
        Err(e) => accounts_error_response(e),
    }
}
