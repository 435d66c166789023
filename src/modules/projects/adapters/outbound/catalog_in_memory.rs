// In memory project catalog seeded from a JSON document.

use serde::Deserialize;
use std::path::Path;
use tokio::sync::RwLock;

use crate::modules::projects::adapters::outbound::catalog::{CatalogError, ProjectCatalog};
use crate::modules::projects::core::model::{Assignment, Project, Task};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Seed(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Seed(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

#[derive(Default)]
pub struct InMemoryProjectCatalog {
    seed: RwLock<CatalogSeed>,
    is_offline: bool,
}

impl InMemoryProjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            seed: RwLock::new(seed),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.is_offline {
            return Err(CatalogError::Backend("Catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectCatalog for InMemoryProjectCatalog {
    async fn projects(&self) -> Result<Vec<Project>, CatalogError> {
        self.ensure_online()?;
        Ok(self.seed.read().await.projects.clone())
    }

    async fn project(&self, project_id: &str) -> Result<Option<Project>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .seed
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned())
    }

    async fn tasks_of(&self, project_id: &str) -> Result<Vec<Task>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .seed
            .read()
            .await
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn assignments_of(&self, employee_id: &str) -> Result<Vec<Assignment>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .seed
            .read()
            .await
            .assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
