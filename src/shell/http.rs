use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::manage_comments::inbound::http as comments_http;
use crate::modules::accounts::use_cases::manage_posts::inbound::http as posts_http;
use crate::modules::accounts::use_cases::manage_users::inbound::http as users_http;
use crate::modules::calendar::use_cases::import_shadow_event::inbound::http as import_http;
use crate::modules::calendar::use_cases::list_shadow_events::inbound::http as shadow_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as projects_http;
use crate::modules::projects::use_cases::list_projects_by_employee::inbound::http as employee_projects_http;
use crate::modules::projects::use_cases::list_tasks_by_project::inbound::http as tasks_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_http;
use crate::modules::time_entries::use_cases::summarize_logged_hours::inbound::http as logged_hours_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/time-entry",
            post(register_http::handle).get(list_http::handle),
        )
        .route("/api/time-entry/clock", post(register_http::handle_clock))
        .route(
            "/api/time-entry/{id}",
            get(list_http::handle_get)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/api/logged-hours", get(logged_hours_http::handle))
        .route("/api/projects", get(projects_http::handle))
        .route("/api/projects/{id}", get(projects_http::handle_get))
        .route("/api/tasks/{id}", get(tasks_http::handle))
        .route(
            "/api/employee-projects/{employee_id}",
            get(employee_projects_http::handle),
        )
        .route("/api/calendar/shadow-events", get(shadow_http::handle))
        .route(
            "/api/calendar/shadow-events/{external_id}/import",
            post(import_http::handle),
        )
        .route("/api/user", get(users_http::list).post(users_http::create))
        .route(
            "/api/user/{id}",
            get(users_http::get).put(users_http::update),
        )
        .route("/api/post", get(posts_http::list).post(posts_http::create))
        .route("/api/post/{id}", get(posts_http::get))
        .route(
            "/api/comment",
            get(comments_http::list).post(comments_http::create),
        )
        .route("/api/comment/{id}", get(comments_http::get))
        .with_state(state)
}

/// The browser front-end runs on its own origin.
pub fn cors(frontend_url: &str) -> anyhow::Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(frontend_url.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub fn with_layers(router: Router, cors: CorsLayer) -> Router {
    router.layer(cors).layer(TraceLayer::new_for_http())
}
