use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::projects::use_cases::list_projects::inbound::graphql::ProjectQuery;
use crate::modules::projects::use_cases::list_tasks_by_project::inbound::graphql::TaskQuery;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::TimeEntryQuery;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::graphql::RegisterTimeEntryMutation;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::graphql::UpdateTimeEntryMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntryQuery, ProjectQuery, TaskQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterTimeEntryMutation,
    UpdateTimeEntryMutation,
    DeleteTimeEntryMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
