// Command side of the time_entries context.
//
// Every command follows the same path: load the stream, fold it into state,
// run a pure decide function, append the accepted events with the loaded
// version as expectation, then hand the intents to the outbox.

use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::decide::decide_update;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

/// Events appended by one command, paired with their stream version.
pub type Appended = Vec<(i64, TimeEntryEvent)>;

pub fn stream_id_of(time_entry_id: &str) -> String {
    format!("TimeEntry-{time_entry_id}")
}

pub struct TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn register(
        &self,
        stream_id: &str,
        command: RegisterTimeEntry,
    ) -> Result<Appended, ApplicationError> {
        self.execute(stream_id, |state| decide_register(state, command))
            .await
    }

    pub async fn update(
        &self,
        stream_id: &str,
        command: UpdateTimeEntry,
    ) -> Result<Appended, ApplicationError> {
        self.execute(stream_id, |state| decide_update(state, command))
            .await
    }

    pub async fn delete(
        &self,
        stream_id: &str,
        command: DeleteTimeEntry,
    ) -> Result<Appended, ApplicationError> {
        self.execute(stream_id, |state| decide_delete(state, command))
            .await
    }

    async fn execute<F>(&self, stream_id: &str, decide: F) -> Result<Appended, ApplicationError>
    where
        F: FnOnce(&TimeEntryState) -> Decision,
    {
        let stream = self.event_store.load(stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(TimeEntryState::None, evolve);

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                let appended: Appended = events
                    .into_iter()
                    .enumerate()
                    .map(|(i, event)| (stream.version + i as i64 + 1, event))
                    .collect();

                if let Err(source) = dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await
                {
                    tracing::error!(stream_id, error = %source, "appended events were not dispatched");
                    return Err(ApplicationError::Outbox { source, appended });
                }
                Ok(appended)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(stream_id, %reason, "command rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
