use crate::modules::time_entries::core::{
    decision::{DecideError, Decision},
    events::{TimeEntryEvent, v1::time_entry_deleted::TimeEntryDeletedV1},
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub fn decide_delete(state: &TimeEntryState, command: DeleteTimeEntry) -> Decision {
    match state {
        TimeEntryState::None => Decision::reject(DecideError::NotFound),
        state if state.is_deleted() => Decision::reject(DecideError::Deleted),
        TimeEntryState::Registered { .. } => {
            Decision::accept(vec![TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
                time_entry_id: command.time_entry_id,
                deleted_at: command.deleted_at,
                deleted_by: command.deleted_by,
            })])
        }
    }
}
