// Outcome of a pure decision over a time entry stream.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::shared::core::primitives::is_supported_instant;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry already exists")]
    AlreadyExists,

    #[error("time entry not found")]
    NotFound,

    #[error("time entry has been deleted")]
    Deleted,

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("start and end time must fall between years 1 and 9999")]
    OutOfRange,

    #[error("project is required")]
    MissingProject,
}

pub enum Decision {
    Accepted {
        events: Vec<TimeEntryEvent>,
        intents: Vec<TimeEntryIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    /// Accept events and ask for each of them to be published.
    pub fn accept(events: Vec<TimeEntryEvent>) -> Self {
        let intents = events
            .iter()
            .cloned()
            .map(|event| TimeEntryIntent::Publish { event })
            .collect();
        Decision::Accepted { events, intents }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

/// Checks shared by registration and update.
pub fn validate_details(project_id: &str, start_time: i64, end_time: i64) -> Result<(), DecideError> {
    if !is_supported_instant(start_time) || !is_supported_instant(end_time) {
        return Err(DecideError::OutOfRange);
    }
    if end_time <= start_time {
        return Err(DecideError::InvalidInterval);
    }
    if project_id.trim().is_empty() {
        return Err(DecideError::MissingProject);
    }
    Ok(())
}
