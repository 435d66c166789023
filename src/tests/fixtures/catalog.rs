use crate::modules::projects::adapters::outbound::catalog_in_memory::CatalogSeed;
use crate::modules::projects::core::model::{Assignment, Project, Task};

pub fn make_catalog_seed() -> CatalogSeed {
    CatalogSeed::from_file("./src/tests/fixtures/catalog/json/catalog.json").unwrap()
}

pub fn make_project(project_id: &str, updated_ts: i64) -> Project {
    Project {
        project_id: project_id.to_string(),
        project_name: format!("Project {project_id}"),
        description: None,
        project_state: Some("ACTIVE".into()),
        billable: true,
        start_date: None,
        end_date: None,
        project_type: Some("Client".into()),
        phase: None,
        is_active: true,
        client_id: None,
        project_billing_type: None,
        created_ts: 0,
        updated_ts,
    }
}

pub fn make_task(task_id: &str, project_id: &str, created_ts: i64) -> Task {
    Task {
        task_id: task_id.to_string(),
        project_id: project_id.to_string(),
        task_name: format!("Task {task_id}"),
        billable: true,
        created_ts,
        updated_ts: created_ts,
    }
}

pub fn make_assignment(
    employee_id: &str,
    project_id: &str,
    is_deleted: bool,
    updated_ts: i64,
) -> Assignment {
    Assignment {
        employee_id: employee_id.to_string(),
        project_id: project_id.to_string(),
        is_deleted,
        updated_ts,
    }
}
