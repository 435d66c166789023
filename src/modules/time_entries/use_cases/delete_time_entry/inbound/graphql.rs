use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::application::command_handler::stream_id_of;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let stream_id = stream_id_of(&time_entry_id);
        let command = DeleteTimeEntry {
            time_entry_id,
            deleted_at: now_millis(),
            deleted_by: state.default_employee_id.clone(),
        };

        let outcome = state.command_handler.delete(&stream_id, command).await;
        state
            .project(&stream_id, &outcome)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        outcome.map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
