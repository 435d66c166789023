// Domain state of a time entry after folding its events.
//
// Notes
// - All i64 time values are epoch milliseconds.
// - A soft deleted entry stays Registered with deleted_at set.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryState {
    None,
    Registered {
        time_entry_id: String,
        user_id: String,
        project_id: String,
        task_id: Option<String>,
        start_time: i64,
        end_time: i64,
        billable: bool,
        description: String,
        created_at: i64,
        created_by: String,
        updated_at: i64,
        updated_by: String,
        deleted_at: Option<i64>,
    },
}

impl TimeEntryState {
    pub fn is_deleted(&self) -> bool {
        matches!(
            self,
            TimeEntryState::Registered {
                deleted_at: Some(_),
                ..
            }
        )
    }
}
