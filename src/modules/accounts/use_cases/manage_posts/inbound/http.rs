use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::accounts::adapters::inbound::http::{
    accounts_error_response, envelope, message,
};
use crate::modules::accounts::core::model::NewPost;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewPost>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.accounts.create_post(new).await {
        Ok(_) => message(StatusCode::OK, "Post created."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.accounts.post(id).await {
        Ok(Some(post)) => envelope(StatusCode::OK, None, Some(("post", post))),
        Ok(None) => message(StatusCode::NOT_FOUND, "Post not found."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.accounts.posts().await {
        Ok(posts) => envelope(StatusCode::OK, Some("All posts"), Some(("posts", posts))),
        Err(e) => accounts_error_response(e),
    }
}
