use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::accounts::adapters::inbound::http::{
    accounts_error_response, envelope, message,
};
use crate::modules::accounts::core::model::{NewUser, UserChanges};
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.accounts.create_user(new).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user created");
            message(StatusCode::OK, "User created.")
        }
        Err(e) => accounts_error_response(e),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UserChanges>, JsonRejection>,
) -> impl IntoResponse {
    let Json(changes) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.accounts.update_user(id, changes).await {
        Ok(_) => message(StatusCode::OK, "User Updated."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.accounts.user(id).await {
        Ok(Some(user)) => envelope(StatusCode::OK, None, Some(("user", user))),
        Ok(None) => message(StatusCode::NOT_FOUND, "User not found."),
        Err(e) => accounts_error_response(e),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.accounts.users().await {
        Ok(users) => envelope(StatusCode::OK, Some("All users"), Some(("users", users))),
        Err(e) => accounts_error_response(e),
    }
}
