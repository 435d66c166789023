// Drives the whole router: register, read, edit, summarize and delete.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::{make_failing_outbox_state, make_test_state};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// 2023-11-14T00:00:00Z
const DAY: i64 = 1_699_920_000_000;

#[tokio::test]
async fn a_time_entry_goes_through_its_whole_lifecycle() {
    let state: AppState = make_test_state();
    let app = router(state.clone());

    let (status, created) = send(
        &app,
        json(
            "POST",
            "/api/time-entry/clock",
            format!(
                r#"{{"user_id":"e-1","project_id":"project-fixed-0001","task_id":"task-fixed-0001","date":{DAY},"start":"10:00","end":"10:10","billable":true,"description":"Standup"}}"#
            ),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["time_entry_id"].as_str().unwrap().to_string();

    let (_, summary) = send(
        &app,
        empty("GET", &format!("/api/logged-hours?employee_id=e-1&date={DAY}")),
    )
    .await;
    assert_eq!(summary["total"], "00:10:00");
    assert_eq!(summary["total_display"], "00:10 hrs");

    let (status, updated) = send(
        &app,
        json(
            "PUT",
            &format!("/api/time-entry/{id}"),
            format!(
                r#"{{"project_id":"project-internal","start_time":{},"end_time":{},"description":"Standup and planning"}}"#,
                DAY + 10 * 3_600_000,
                DAY + 11 * 3_600_000
            ),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["duration"], "01:00:00");
    assert_eq!(updated["task_id"], serde_json::Value::Null);
    assert_eq!(updated["user_id"], "e-1");

    let (status, _) = send(&app, empty("DELETE", &format!("/api/time-entry/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listed) = send(&app, empty("GET", "/api/time-entry?employee_id=e-1")).await;
    assert_eq!(listed, serde_json::json!([]));

    let (_, summary) = send(
        &app,
        empty("GET", &format!("/api/logged-hours?employee_id=e-1&date={DAY}")),
    )
    .await;
    assert_eq!(summary["total"], "00:00:00");

    let published: Vec<_> = state
        .outbox
        .drain()
        .await
        .into_iter()
        .map(|row| (row.event_type, row.stream_version))
        .collect();
    assert_eq!(
        published,
        vec![
            ("TimeEntryRegistered".to_string(), 1),
            ("TimeEntryUpdated".to_string(), 2),
            ("TimeEntryDeleted".to_string(), 3),
        ]
    );
}

#[tokio::test]
async fn an_imported_shadow_event_disappears_from_the_calendar() {
    let state = crate::tests::fixtures::state::make_calendar_state();
    let app = router(state);

    let (_, before) = send(&app, empty("GET", "/api/calendar/shadow-events?from=0")).await;
    assert_eq!(before.as_array().unwrap().len(), 3);

    let (status, _) = send(
        &app,
        empty("POST", "/api/calendar/shadow-events/ev-free/import"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, after) = send(&app, empty("GET", "/api/calendar/shadow-events?from=0")).await;
    let ids: Vec<_> = after
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["external_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ev-logged", "ev-overlap"]);
}

#[tokio::test]
async fn stored_entries_stay_readable_and_editable_when_publishing_fails() {
    let state = make_failing_outbox_state();
    let app = router(state.clone());

    let (status, _) = send(
        &app,
        json(
            "POST",
            "/api/time-entry",
            r#"{"user_id":"e-2","project_id":"p-1","start_time":1000,"end_time":61000,"description":"Draft"}"#
                .to_string(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, listed) = send(&app, empty("GET", "/api/time-entry?employee_id=e-2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let id = listed[0]["time_entry_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        json(
            "PUT",
            &format!("/api/time-entry/{id}"),
            r#"{"project_id":"p-1","start_time":1000,"end_time":121000,"description":"Final"}"#
                .to_string(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, view) = send(&app, empty("GET", &format!("/api/time-entry/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["description"], "Final");
    assert_eq!(view["duration"], "00:02:00");
    assert_eq!(state.outbox.pending().await, 0);
}
