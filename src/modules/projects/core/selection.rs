// Ordering and filtering rules of the catalog read side.

use std::collections::{HashMap, HashSet};

use crate::modules::projects::core::model::{Assignment, Project, Task};

/// Most recently updated first.
pub fn by_recent_update(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| b.updated_ts.cmp(&a.updated_ts));
    projects
}

/// Newest first.
pub fn by_newest(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| b.created_ts.cmp(&a.created_ts));
    tasks
}

/// Projects behind the live assignments of an employee, ordered by the most
/// recently touched assignment. A project shows up once.
pub fn projects_of_employee(
    employee_id: &str,
    mut assignments: Vec<Assignment>,
    projects: &[Project],
) -> Vec<Project> {
    assignments.retain(|a| a.employee_id == employee_id && !a.is_deleted);
    assignments.sort_by(|a, b| b.updated_ts.cmp(&a.updated_ts));

    let index: HashMap<&str, &Project> = projects
        .iter()
        .map(|p| (p.project_id.as_str(), p))
        .collect();
    let mut seen = HashSet::new();

    assignments
        .iter()
        .filter(|a| seen.insert(a.project_id.clone()))
        .filter_map(|a| index.get(a.project_id.as_str()).map(|p| (*p).clone()))
        .collect()
}
