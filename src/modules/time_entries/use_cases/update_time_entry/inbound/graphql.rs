use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::GqlTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTimeEntryMutation;

#[Object]
impl UpdateTimeEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: String,
        project_id: String,
        task_id: Option<String>,
        start_time: i64,
        end_time: i64,
        billable: Option<bool>,
        description: String,
    ) -> GqlResult<Option<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let stream_id = stream_id_of(&time_entry_id);
        let command = UpdateTimeEntry {
            time_entry_id: time_entry_id.clone(),
            project_id,
            task_id,
            start_time,
            end_time,
            billable: billable.unwrap_or(false),
            description,
            updated_at: now_millis(),
            updated_by: state.default_employee_id.clone(),
        };

        let outcome = state.command_handler.update(&stream_id, command).await;
        state
            .project(&stream_id, &outcome)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        outcome.map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(state.queries.get_by_id(&time_entry_id).await?.map(Into::into))
    }
}
