// Evolve: combine a prior state with a new event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Events that do not fit the current state leave it unchanged.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::TimeEntryState;

pub fn evolve(state: TimeEntryState, event: TimeEntryEvent) -> TimeEntryState {
    match (state, event) {
        (TimeEntryState::None, TimeEntryEvent::TimeEntryRegisteredV1(e)) => {
            TimeEntryState::Registered {
                time_entry_id: e.time_entry_id,
                user_id: e.user_id,
                project_id: e.project_id,
                task_id: e.task_id,
                start_time: e.start_time,
                end_time: e.end_time,
                billable: e.billable,
                description: e.description,
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by,
                deleted_at: None,
            }
        }
        (
            TimeEntryState::Registered {
                time_entry_id,
                user_id,
                created_at,
                created_by,
                deleted_at: None,
                ..
            },
            TimeEntryEvent::TimeEntryUpdatedV1(e),
        ) => TimeEntryState::Registered {
            time_entry_id,
            user_id,
            project_id: e.project_id,
            task_id: e.task_id,
            start_time: e.start_time,
            end_time: e.end_time,
            billable: e.billable,
            description: e.description,
            created_at,
            created_by,
            updated_at: e.updated_at,
            updated_by: e.updated_by,
            deleted_at: None,
        },
        (
            TimeEntryState::Registered {
                time_entry_id,
                user_id,
                project_id,
                task_id,
                start_time,
                end_time,
                billable,
                description,
                created_at,
                created_by,
                deleted_at: None,
                ..
            },
            TimeEntryEvent::TimeEntryDeletedV1(e),
        ) => TimeEntryState::Registered {
            time_entry_id,
            user_id,
            project_id,
            task_id,
            start_time,
            end_time,
            billable,
            description,
            created_at,
            created_by,
            updated_at: e.deleted_at,
            updated_by: e.deleted_by,
            deleted_at: Some(e.deleted_at),
        },
        (state, _) => state,
    }
}
