use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::error_response;
use crate::modules::time_entries::use_cases::summarize_logged_hours::summary::summarize;
use crate::shared::core::primitives::{day_bounds, now_millis};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoggedHoursParams {
    pub employee_id: Option<String>,
    /// Any instant on the requested day, defaults to now.
    pub date: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<LoggedHoursParams>,
) -> impl IntoResponse {
    let employee_id = params
        .employee_id
        .unwrap_or_else(|| state.default_employee_id.clone());
    let Some((from, to)) = day_bounds(params.date.unwrap_or_else(now_millis)) else {
        return error_response(StatusCode::BAD_REQUEST, "date is out of range");
    };

    match state
        .queries
        .list_by_user_starting_between(&employee_id, from, to)
        .await
    {
        Ok(entries) => Json(summarize(from, entries)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %employee_id, "failed to summarize logged hours");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch time entries")
        }
    }
}
