// Root event enumeration for time entries and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod time_entry_deleted;
    pub mod time_entry_registered;
    pub mod time_entry_updated;
}

use v1::time_entry_deleted::TimeEntryDeletedV1;
use v1::time_entry_registered::TimeEntryRegisteredV1;
use v1::time_entry_updated::TimeEntryUpdatedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryRegisteredV1(TimeEntryRegisteredV1),
    TimeEntryUpdatedV1(TimeEntryUpdatedV1),
    TimeEntryDeletedV1(TimeEntryDeletedV1),
}

impl TimeEntryEvent {
    /// Name and schema version used on the outbox.
    pub fn kind(&self) -> (&'static str, i32) {
        match self {
            TimeEntryEvent::TimeEntryRegisteredV1(_) => ("TimeEntryRegistered", 1),
            TimeEntryEvent::TimeEntryUpdatedV1(_) => ("TimeEntryUpdated", 1),
            TimeEntryEvent::TimeEntryDeletedV1(_) => ("TimeEntryDeleted", 1),
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            TimeEntryEvent::TimeEntryRegisteredV1(e) => e.created_at,
            TimeEntryEvent::TimeEntryUpdatedV1(e) => e.updated_at,
            TimeEntryEvent::TimeEntryDeletedV1(e) => e.deleted_at,
        }
    }
}
