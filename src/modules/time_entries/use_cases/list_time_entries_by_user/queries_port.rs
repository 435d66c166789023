// Read access to the time entry projection. Soft deleted rows are never returned.

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryQueries {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Entries of a user starting in `[from, to)`, latest first.
    async fn list_by_user_starting_between(
        &self,
        user_id: &str,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    async fn get_by_id(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>>;
}
