use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::calendar::core::reconcile::reconcile;
use crate::shared::core::primitives::{MILLIS_PER_DAY, now_millis};
use crate::shell::state::AppState;

const DEFAULT_MAX_RESULTS: usize = 20;

#[derive(Deserialize)]
pub struct ShadowEventsParams {
    pub employee_id: Option<String>,
    pub from: Option<i64>,
    pub max_results: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ShadowEventsParams>,
) -> impl IntoResponse {
    let employee_id = params
        .employee_id
        .unwrap_or_else(|| state.default_employee_id.clone());
    let from = params.from.unwrap_or_else(now_millis);

    let shadows = match state
        .calendar
        .upcoming(from, params.max_results.unwrap_or(DEFAULT_MAX_RESULTS))
        .await
    {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch calendar events");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    // Local entries may have started up to a day before the first event.
    let window_start = shadows
        .iter()
        .map(|e| e.start_time)
        .min()
        .unwrap_or(from)
        .saturating_sub(MILLIS_PER_DAY);
    let window_end = shadows.iter().map(|e| e.end_time).max().unwrap_or(from);

    match state
        .queries
        .list_by_user_starting_between(&employee_id, window_start, window_end)
        .await
    {
        Ok(locals) => Json(reconcile(shadows, &locals)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %employee_id, "failed to fetch local time entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
