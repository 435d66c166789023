// Catalog entities. Timestamps are epoch milliseconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_state: Option<String>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(rename = "type", default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub project_billing_type: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub project_id: String,
    pub task_name: String,
    #[serde(default)]
    pub billable: bool,
    pub created_ts: i64,
    pub updated_ts: i64,
}

/// Project to employee link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: String,
    pub project_id: String,
    #[serde(default)]
    pub is_deleted: bool,
    pub updated_ts: i64,
}
