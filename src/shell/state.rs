use crate::modules::accounts::adapters::outbound::repository::AccountsRepository;
use crate::modules::accounts::adapters::outbound::repository_in_memory::InMemoryAccounts;
use crate::modules::calendar::adapters::outbound::provider::CalendarProvider;
use crate::modules::calendar::adapters::outbound::provider_in_memory::InMemoryCalendarProvider;
use crate::modules::projects::adapters::outbound::catalog::ProjectCatalog;
use crate::modules::projects::adapters::outbound::catalog_in_memory::InMemoryProjectCatalog;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::application::command_handler::{
    Appended, TimeEntryCommandHandler,
};
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub type TimeEntryCommands =
    TimeEntryCommandHandler<InMemoryEventStore<TimeEntryEvent>, InMemoryDomainOutbox>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub command_handler: Arc<TimeEntryCommands>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub catalog: Arc<dyn ProjectCatalog>,
    pub calendar: Arc<dyn CalendarProvider>,
    pub accounts: Arc<dyn AccountsRepository>,
    pub default_employee_id: String,
}

impl AppState {
    /// Wire the time entry context on the given event store. Catalog,
    /// calendar and accounts start empty and in memory.
    pub fn new(
        topic: impl Into<String>,
        default_employee_id: impl Into<String>,
        event_store: InMemoryEventStore<TimeEntryEvent>,
    ) -> Self {
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(InMemoryProjections::new());
        let projector = Arc::new(Projector::new(
            "time_entry_summary",
            projections.clone(),
            projections.clone(),
        ));
        let command_handler = Arc::new(TimeEntryCommandHandler::new(
            topic,
            event_store,
            outbox.clone(),
        ));

        Self {
            queries: projections,
            command_handler,
            projector,
            outbox,
            catalog: Arc::new(InMemoryProjectCatalog::new()),
            calendar: Arc::new(InMemoryCalendarProvider::new()),
            accounts: Arc::new(InMemoryAccounts::new()),
            default_employee_id: default_employee_id.into(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn ProjectCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_calendar(mut self, calendar: Arc<dyn CalendarProvider>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Project the events a command appended so reads see them. Events stored
    /// before the outbox failed are projected too.
    pub async fn project(
        &self,
        stream_id: &str,
        outcome: &Result<Appended, ApplicationError>,
    ) -> anyhow::Result<()> {
        let appended = match outcome {
            Ok(appended) => appended,
            Err(error) => match error.appended() {
                Some(appended) => appended,
                None => return Ok(()),
            },
        };
        self.projector.apply_appended(stream_id, appended).await
    }
}
