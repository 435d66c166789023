use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::projects::adapters::outbound::catalog::CatalogError;
use crate::modules::projects::core::model::Project;
use crate::modules::projects::core::selection::projects_of_employee;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct EmployeeProjectsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let selected = async {
        let assignments = state.catalog.assignments_of(&employee_id).await?;
        let projects = state.catalog.projects().await?;
        Ok::<_, CatalogError>(projects_of_employee(&employee_id, assignments, &projects))
    }
    .await;

    match selected {
        Ok(projects) => Json(EmployeeProjectsResponse {
            success: true,
            data: Some(projects),
            message: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, %employee_id, "failed to fetch employee projects");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EmployeeProjectsResponse {
                    success: false,
                    data: None,
                    message: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod list_projects_by_employee_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_catalog_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/employee-projects/{employee_id}", get(handle))
            .with_state(state)
    }

    async fn call(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_wrap_the_deduplicated_projects_in_an_envelope() {
        let (status, json) = call(
            make_test_state(),
            "/api/employee-projects/user-fixed-0001",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        let ids: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["project_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["project-internal", "project-fixed-0001"]);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn it_should_return_an_empty_list_for_an_unassigned_employee() {
        let (status, json) = call(make_test_state(), "/api/employee-projects/nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_report_failures_in_the_envelope() {
        let (status, json) = call(
            make_offline_catalog_state(),
            "/api/employee-projects/user-fixed-0001",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "backend error: Catalog offline");
    }
}
