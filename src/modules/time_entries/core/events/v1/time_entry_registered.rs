// Event payload: TimeEntryRegisteredV1.
//
// Purpose
// - Record the business fact that an employee logged time on a project.
//
// Timestamps
// - All i64 values use epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryRegisteredV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub billable: bool,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
}
