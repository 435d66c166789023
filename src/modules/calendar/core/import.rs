// Turning a shadow event into a time entry registration.

use thiserror::Error;

use crate::modules::calendar::core::reconcile::is_duplicate;
use crate::modules::calendar::core::shadow_event::ShadowEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;

pub const DEFAULT_PROJECT_ID: &str = "default-project";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportRejected {
    #[error("shadow event {0} is already logged")]
    AlreadyLogged(String),
}

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub billable: Option<bool>,
}

pub fn plan_import(
    shadow: &ShadowEvent,
    locals: &[TimeEntryView],
    employee_id: &str,
    time_entry_id: String,
    now: i64,
    options: ImportOptions,
) -> Result<RegisterTimeEntry, ImportRejected> {
    if locals.iter().any(|local| is_duplicate(shadow, local)) {
        return Err(ImportRejected::AlreadyLogged(shadow.external_id.clone()));
    }
    Ok(RegisterTimeEntry {
        time_entry_id,
        user_id: employee_id.to_string(),
        project_id: options
            .project_id
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
        task_id: options.task_id,
        start_time: shadow.start_time,
        end_time: shadow.end_time,
        billable: options.billable.unwrap_or(true),
        description: shadow.title.clone(),
        created_at: now,
        created_by: employee_id.to_string(),
    })
}
