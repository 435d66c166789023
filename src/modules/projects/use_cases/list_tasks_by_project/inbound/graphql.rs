use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::core::model::Task;
use crate::modules::projects::core::selection::by_newest;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTask {
    pub task_id: String,
    pub project_id: String,
    pub task_name: String,
    pub billable: bool,
    pub created_ts: i64,
    pub updated_ts: i64,
}

impl From<Task> for GqlTask {
    fn from(t: Task) -> Self {
        Self {
            task_id: t.task_id,
            project_id: t.project_id,
            task_name: t.task_name,
            billable: t.billable,
            created_ts: t.created_ts,
            updated_ts: t.updated_ts,
        }
    }
}

#[derive(Default)]
pub struct TaskQuery;

#[Object]
impl TaskQuery {
    async fn tasks(&self, context: &Context<'_>, project_id: String) -> GqlResult<Vec<GqlTask>> {
        let state = context.data_unchecked::<AppState>();
        let tasks = state.catalog.tasks_of(&project_id).await?;
        Ok(by_newest(tasks).into_iter().map(Into::into).collect())
    }
}
