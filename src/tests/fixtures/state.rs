use std::sync::Arc;

use crate::modules::calendar::adapters::outbound::provider_in_memory::InMemoryCalendarProvider;
use crate::modules::projects::adapters::outbound::catalog_in_memory::InMemoryProjectCatalog;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::calendar::make_shadow_event;
use crate::tests::fixtures::catalog::make_catalog_seed;

pub const TOPIC: &str = "time-entries";
pub const DEFAULT_EMPLOYEE_ID: &str = "605c5c469b9a512b4b59a22d";

fn base_state(event_store: InMemoryEventStore<TimeEntryEvent>) -> AppState {
    AppState::new(TOPIC, DEFAULT_EMPLOYEE_ID, event_store).with_catalog(Arc::new(
        InMemoryProjectCatalog::from_seed(make_catalog_seed()),
    ))
}

pub fn make_test_state() -> AppState {
    base_state(InMemoryEventStore::<TimeEntryEvent>::new())
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::<TimeEntryEvent>::new();
    event_store.toggle_offline();
    base_state(event_store)
}

/// The outbox rejects every row because the topic is blank.
pub fn make_failing_outbox_state() -> AppState {
    AppState::new("  ", DEFAULT_EMPLOYEE_ID, InMemoryEventStore::<TimeEntryEvent>::new())
}

pub fn make_offline_catalog_state() -> AppState {
    let mut catalog = InMemoryProjectCatalog::from_seed(make_catalog_seed());
    catalog.toggle_offline();
    make_test_state().with_catalog(Arc::new(catalog))
}

fn calendar_events() -> InMemoryCalendarProvider {
    InMemoryCalendarProvider::with_events(vec![
        make_shadow_event("ev-logged", "Standup", 1_000_000, 1_060_000),
        make_shadow_event("ev-overlap", "Sync", 1_030_000, 1_090_000),
        make_shadow_event("ev-free", "Planning", 2_000_000, 2_600_000),
    ])
}

/// Three provider events: one matching a "Standup" entry logged at
/// 1_000_000..1_060_000, one overlapping it and one free.
pub fn make_calendar_state() -> AppState {
    make_test_state().with_calendar(Arc::new(calendar_events()))
}

pub fn make_offline_calendar_state() -> AppState {
    let mut calendar = calendar_events();
    calendar.toggle_offline();
    make_test_state().with_calendar(Arc::new(calendar))
}
