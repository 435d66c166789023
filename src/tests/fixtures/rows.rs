use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;

/// A one minute entry of `user-fixed-0001` starting at `start_time`.
pub fn make_time_entry_row(time_entry_id: &str, start_time: i64) -> TimeEntryRow {
    TimeEntryRow {
        time_entry_id: time_entry_id.to_string(),
        user_id: "user-fixed-0001".into(),
        project_id: "project-fixed-0001".into(),
        task_id: None,
        start_time,
        end_time: start_time + 60_000,
        duration: "00:01:00".into(),
        billable: true,
        description: "This is a test".into(),
        created_at: start_time,
        created_by: "user-fixed-0001".into(),
        updated_at: start_time,
        updated_by: "user-fixed-0001".into(),
        deleted_at: None,
        last_event_id: None,
    }
}
