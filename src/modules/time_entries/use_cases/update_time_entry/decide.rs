use crate::modules::time_entries::core::{
    decision::{DecideError, Decision, validate_details},
    events::{TimeEntryEvent, v1::time_entry_updated::TimeEntryUpdatedV1},
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;

pub fn decide_update(state: &TimeEntryState, command: UpdateTimeEntry) -> Decision {
    match state {
        TimeEntryState::None => Decision::reject(DecideError::NotFound),
        TimeEntryState::Registered {
            deleted_at: Some(_),
            ..
        } => Decision::reject(DecideError::Deleted),
        TimeEntryState::Registered { .. } => {
            if let Err(reason) =
                validate_details(&command.project_id, command.start_time, command.end_time)
            {
                return Decision::reject(reason);
            }
            Decision::accept(vec![TimeEntryEvent::TimeEntryUpdatedV1(TimeEntryUpdatedV1 {
                time_entry_id: command.time_entry_id,
                project_id: command.project_id,
                task_id: command.task_id,
                start_time: command.start_time,
                end_time: command.end_time,
                billable: command.billable,
                description: command.description,
                updated_at: command.updated_at,
                updated_by: command.updated_by,
            })])
        }
    }
}
