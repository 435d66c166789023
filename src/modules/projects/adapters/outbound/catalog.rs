// Project catalog port.
//
// Purpose
// - Give the read side access to projects, tasks and project assignments.
//
// Responsibilities
// - Return raw entities; ordering lives in core::selection.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::projects::core::model::{Assignment, Project, Task};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog seed: {0}")]
    Seed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    async fn projects(&self) -> Result<Vec<Project>, CatalogError>;
    async fn project(&self, project_id: &str) -> Result<Option<Project>, CatalogError>;
    async fn tasks_of(&self, project_id: &str) -> Result<Vec<Task>, CatalogError>;
    async fn assignments_of(&self, employee_id: &str) -> Result<Vec<Assignment>, CatalogError>;
}
