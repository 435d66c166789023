use axum::{Extension, routing::get};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::modules::calendar::adapters::outbound::google_calendar::GoogleCalendarProvider;
use time_tracking::modules::projects::adapters::outbound::catalog_in_memory::{
    CatalogSeed, InMemoryProjectCatalog,
};
use time_tracking::modules::time_entries::core::events::TimeEntryEvent;
use time_tracking::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use time_tracking::shell::config::AppConfig;
use time_tracking::shell::graphql::{graphiql, graphql, schema};
use time_tracking::shell::http::{cors, router, with_layers};
use time_tracking::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let mut state = AppState::new(
        config.time_entries_topic.clone(),
        config.default_employee_id.clone(),
        InMemoryEventStore::<TimeEntryEvent>::new(),
    );

    if let Some(path) = &config.catalog_seed_path {
        let seed = CatalogSeed::from_file(path)?;
        tracing::info!(
            projects = seed.projects.len(),
            tasks = seed.tasks.len(),
            "catalog seeded from {}",
            path.display()
        );
        state = state.with_catalog(Arc::new(InMemoryProjectCatalog::from_seed(seed)));
    }

    match &config.google_calendar_token {
        Some(token) => {
            tracing::info!(calendar_id = %config.google_calendar_id, "using Google Calendar");
            state = state.with_calendar(Arc::new(GoogleCalendarProvider::new(
                config.google_calendar_id.clone(),
                token.clone(),
            )));
        }
        None => tracing::warn!("GOOGLE_CALENDAR_TOKEN not set, shadow events come from memory"),
    }

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)));
    let app = with_layers(app, cors(&config.frontend_url)?);

    let addr = config.addr();
    tracing::info!("REST API: http://{}/api, GraphQL endpoint: http://{}/gql", addr, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
