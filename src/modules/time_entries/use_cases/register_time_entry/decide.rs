use crate::modules::time_entries::core::{
    decision::{DecideError, Decision, validate_details},
    events::{TimeEntryEvent, v1::time_entry_registered::TimeEntryRegisteredV1},
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;

pub fn decide_register(state: &TimeEntryState, command: RegisterTimeEntry) -> Decision {
    match state {
        TimeEntryState::None => {
            if let Err(reason) =
                validate_details(&command.project_id, command.start_time, command.end_time)
            {
                return Decision::reject(reason);
            }
            Decision::accept(vec![TimeEntryEvent::TimeEntryRegisteredV1(
                TimeEntryRegisteredV1 {
                    time_entry_id: command.time_entry_id,
                    user_id: command.user_id,
                    project_id: command.project_id,
                    task_id: command.task_id,
                    start_time: command.start_time,
                    end_time: command.end_time,
                    billable: command.billable,
                    description: command.description,
                    created_at: command.created_at,
                    created_by: command.created_by,
                },
            )])
        }
        _ => Decision::reject(DecideError::AlreadyExists),
    }
}
