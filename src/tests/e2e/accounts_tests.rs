use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn comments_are_counted_on_their_post() {
    let app = router(make_test_state());

    let (status, _) = send(
        &app,
        post("/api/user", r#"{"name":"Ada","email":"ada@example.com","password":"x"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        post("/api/post", r#"{"user_id":1,"title":"Hello","description":"First post"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post created.");

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            post("/api/comment", r#"{"user_id":1,"post_id":1,"comment":"Nice"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "comment created.");
    }

    let (_, body) = send(&app, get("/api/post/1")).await;
    assert_eq!(body["post"]["comment_count"], 2);

    let (_, body) = send(&app, get("/api/post")).await;
    assert_eq!(body["posts"][0]["comment"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, get("/api/comment")).await;
    let comment_id = body["comments"][0]["id"].as_str().unwrap().to_string();
    let (status, body) = send(&app, get(&format!("/api/comment/{comment_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comment"]["comment"], "Nice");

    let (_, body) = send(&app, get("/api/user")).await;
    assert_eq!(body["users"][0]["comment_count"], 2);
    assert_eq!(body["users"][0]["post_count"], 1);
}

#[tokio::test]
async fn orphans_are_refused() {
    let app = router(make_test_state());

    let (status, body) = send(
        &app,
        post("/api/post", r#"{"user_id":9,"title":"Lost"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"status": 404, "message": "User not found."}));

    let (status, _) = send(
        &app,
        post("/api/comment", r#"{"user_id":1,"post_id":9,"comment":"?"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/comment/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
