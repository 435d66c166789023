// Replace the editable fields of an existing time entry.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimeEntry {
    pub time_entry_id: String,
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub billable: bool,
    pub description: String,
    pub updated_at: i64,
    pub updated_by: String,
}
