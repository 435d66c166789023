use serde::{Deserialize, Serialize};

/// A calendar entry from the external provider that has no local time entry yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowEvent {
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
}
