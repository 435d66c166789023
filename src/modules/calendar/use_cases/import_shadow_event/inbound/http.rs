use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::modules::calendar::core::import::{ImportOptions, plan_import};
use crate::modules::time_entries::adapters::inbound::http::{
    application_error_response, projection_failed,
};
use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::shared::core::primitives::{MILLIS_PER_DAY, now_millis};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ImportShadowEventBody {
    pub employee_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub billable: Option<bool>,
}

#[derive(Serialize)]
pub struct ImportShadowEventResponse {
    pub time_entry_id: String,
    pub external_id: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let body: ImportShadowEventBody = if body.is_empty() {
        ImportShadowEventBody::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(b) => b,
            Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    };
    let employee_id = body
        .employee_id
        .unwrap_or_else(|| state.default_employee_id.clone());

    let shadow = match state.calendar.event(&external_id).await {
        Ok(Some(shadow)) => shadow,
        Ok(None) => return error(StatusCode::NOT_FOUND, "shadow event not found"),
        Err(e) => {
            tracing::error!(error = %e, %external_id, "failed to fetch calendar event");
            return error(StatusCode::BAD_GATEWAY, e.to_string());
        }
    };

    let locals = match state
        .queries
        .list_by_user_starting_between(
            &employee_id,
            shadow.start_time.saturating_sub(MILLIS_PER_DAY),
            shadow.end_time,
        )
        .await
    {
        Ok(locals) => locals,
        Err(e) => return projection_failed(e),
    };

    let command = match plan_import(
        &shadow,
        &locals,
        &employee_id,
        Uuid::now_v7().to_string(),
        now_millis(),
        ImportOptions {
            project_id: body.project_id,
            task_id: body.task_id,
            billable: body.billable,
        },
    ) {
        Ok(command) => command,
        Err(rejected) => return error(StatusCode::CONFLICT, rejected.to_string()),
    };

    let time_entry_id = command.time_entry_id.clone();
    let stream_id = stream_id_of(&time_entry_id);
    let outcome = state.command_handler.register(&stream_id, command).await;
    if let Err(e) = state.project(&stream_id, &outcome).await {
        return projection_failed(e);
    }
    if let Err(e) = outcome {
        return application_error_response(e);
    }
    tracing::info!(%external_id, %time_entry_id, "shadow event imported");

    (
        StatusCode::CREATED,
        Json(ImportShadowEventResponse {
            time_entry_id,
            external_id,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod import_shadow_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::make_calendar_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/calendar/shadow-events/{external_id}/import",
                post(handle),
            )
            .with_state(state)
    }

    fn import(id: &str, body: &'static str) -> Request<Body> {
        Request::post(format!("/api/calendar/shadow-events/{id}/import"))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_import_once_and_then_conflict() {
        let state = make_calendar_state();

        let created = app(state.clone())
            .oneshot(import("ev-free", r#"{"employee_id":"user-fixed-0001"}"#))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let bytes = created.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let id = json["time_entry_id"].as_str().unwrap();

        let view = state.queries.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(view.project_id, "default-project");
        assert_eq!(view.description, "Planning");
        assert!(view.billable);

        let again = app(state)
            .oneshot(import("ev-free", r#"{"employee_id":"user-fixed-0001"}"#))
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_accept_an_empty_body() {
        let state = make_calendar_state();
        let response = app(state.clone())
            .oneshot(
                Request::post("/api/calendar/shadow-events/ev-overlap/import")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let listed = state
            .queries
            .list_by_user_id(&state.default_employee_id, 0, 10, true)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let response = app(make_calendar_state())
            .oneshot(import("ev-nope", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_calendar_state())
            .oneshot(import("ev-free", "not-json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
