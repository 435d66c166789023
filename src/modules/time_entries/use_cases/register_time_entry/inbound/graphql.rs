use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeEntryMutation;

#[Object]
impl RegisterTimeEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn register_time_entry(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: Option<String>,
        start_time: i64,
        end_time: i64,
        billable: Option<bool>,
        description: String,
    ) -> GqlResult<ID> {
        let time_entry_id = Uuid::now_v7().to_string();
        let state = context.data_unchecked::<AppState>();
        let user_id = user_id.unwrap_or_else(|| state.default_employee_id.clone());

        let command = RegisterTimeEntry {
            time_entry_id: time_entry_id.clone(),
            created_by: user_id.clone(),
            user_id,
            project_id,
            task_id,
            start_time,
            end_time,
            billable: billable.unwrap_or(false),
            description,
            created_at: now_millis(),
        };

        let stream_id = stream_id_of(&time_entry_id);
        let outcome = state.command_handler.register(&stream_id, command).await;
        // Inline projection so queries see the new row immediately
        state
            .project(&stream_id, &outcome)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        outcome.map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(time_entry_id))
    }
}
