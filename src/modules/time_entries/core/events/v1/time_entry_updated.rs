// Event payload: TimeEntryUpdatedV1.
//
// Carries the complete editable snapshot, the entry is replaced as a whole.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryUpdatedV1 {
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
