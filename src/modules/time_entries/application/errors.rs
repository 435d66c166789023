use crate::modules::time_entries::application::command_handler::Appended;
use crate::modules::time_entries::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    /// The events are stored, publishing them failed.
    #[error("events appended but intents not dispatched: {source}")]
    Outbox {
        source: OutboxError,
        appended: Appended,
    },

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

impl ApplicationError {
    /// The entry is unknown or soft deleted.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ApplicationError::Domain(DecideError::NotFound | DecideError::Deleted)
        )
    }

    /// Events that made it into the store despite the failure.
    pub fn appended(&self) -> Option<&Appended> {
        match self {
            ApplicationError::Outbox { appended, .. } => Some(appended),
            _ => None,
        }
    }
}
