use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;

pub fn make_update_command() -> UpdateTimeEntry {
    UpdateTimeEntry {
        time_entry_id: "te-fixed-0001".into(),
        project_id: "project-fixed-0002".into(),
        task_id: None,
        start_time: 1_700_000_000_000,
        end_time: 1_700_001_800_000,
        billable: false,
        description: "Reviewed pull requests".into(),
        updated_at: 1_700_002_000_000,
        updated_by: "user-fixed-0001".into(),
    }
}
