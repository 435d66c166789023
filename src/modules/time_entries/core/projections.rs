// Translate a domain event into read model mutations.
//
// Responsibilities
// - Calculate last_event_id as a stable identifier like "stream_id:version".
// - Build an upsert for registration and minimal patches for change events.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;
use crate::shared::core::primitives::{format_hms, span_millis};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryPatch {
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub billable: bool,
    pub description: String,
    pub updated_at: i64,
    pub updated_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    Update {
        time_entry_id: String,
        patch: TimeEntryPatch,
        last_event_id: String,
    },
    SoftDelete {
        time_entry_id: String,
        deleted_at: i64,
        deleted_by: String,
        last_event_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeEntryEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeEntryEvent::TimeEntryRegisteredV1(details) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: details.time_entry_id.clone(),
            user_id: details.user_id.clone(),
            project_id: details.project_id.clone(),
            task_id: details.task_id.clone(),
            start_time: details.start_time,
            end_time: details.end_time,
            duration: format_hms(span_millis(details.start_time, details.end_time)),
            billable: details.billable,
            description: details.description.clone(),
            created_at: details.created_at,
            created_by: details.created_by.clone(),
            updated_at: details.created_at,
            updated_by: details.created_by.clone(),
            deleted_at: None,
            last_event_id: Some(stream_key),
        })],
        TimeEntryEvent::TimeEntryUpdatedV1(details) => vec![Mutation::Update {
            time_entry_id: details.time_entry_id.clone(),
            patch: TimeEntryPatch {
                project_id: details.project_id.clone(),
                task_id: details.task_id.clone(),
                start_time: details.start_time,
                end_time: details.end_time,
                billable: details.billable,
                description: details.description.clone(),
                updated_at: details.updated_at,
                updated_by: details.updated_by.clone(),
            },
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimeEntryDeletedV1(details) => vec![Mutation::SoftDelete {
            time_entry_id: details.time_entry_id.clone(),
            deleted_at: details.deleted_at,
            deleted_by: details.deleted_by.clone(),
            last_event_id: stream_key,
        }],
    }
}

impl TimeEntryRow {
    pub fn apply_patch(&mut self, patch: TimeEntryPatch, last_event_id: String) {
        self.project_id = patch.project_id;
        self.task_id = patch.task_id;
        self.start_time = patch.start_time;
        self.end_time = patch.end_time;
        self.duration = format_hms(span_millis(patch.start_time, patch.end_time));
        self.billable = patch.billable;
        self.description = patch.description;
        self.updated_at = patch.updated_at;
        self.updated_by = patch.updated_by;
        self.last_event_id = Some(last_event_id);
    }
}
