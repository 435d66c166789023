use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::core::model::Project;
use crate::modules::projects::core::selection::{by_recent_update, projects_of_employee};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub project_id: String,
    pub project_name: String,
    pub description: Option<String>,
    pub project_state: Option<String>,
    pub billable: bool,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub project_type: Option<String>,
    pub phase: Option<String>,
    pub is_active: bool,
    pub client_id: Option<String>,
    pub project_billing_type: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            project_id: p.project_id,
            project_name: p.project_name,
            description: p.description,
            project_state: p.project_state,
            billable: p.billable,
            start_date: p.start_date,
            end_date: p.end_date,
            project_type: p.project_type,
            phase: p.phase,
            is_active: p.is_active,
            client_id: p.client_id,
            project_billing_type: p.project_billing_type,
            created_ts: p.created_ts,
            updated_ts: p.updated_ts,
        }
    }
}

#[derive(Default)]
pub struct ProjectQuery;

#[Object]
impl ProjectQuery {
    /// All projects, or only those assigned to `employee_id` when given.
    async fn projects(
        &self,
        context: &Context<'_>,
        employee_id: Option<String>,
    ) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let projects = state.catalog.projects().await?;
        let selected = match employee_id {
            Some(employee_id) => {
                let assignments = state.catalog.assignments_of(&employee_id).await?;
                projects_of_employee(&employee_id, assignments, &projects)
            }
            None => by_recent_update(projects),
        };
        Ok(selected.into_iter().map(Into::into).collect())
    }
}
