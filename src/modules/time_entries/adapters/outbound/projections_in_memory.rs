// In memory projection repository, watermark repository and query side.
//
// Purpose
// - Exercise projectors and queries without a database.
//
// Responsibilities
// - Store read model rows in a map keyed by time entry id.
// - Skip mutations whose last_event_id was already applied to the row.
// - Track the last processed event per projector.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::projections::TimeEntryPatch;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("{what} repository offline"));
        }
        Ok(())
    }

    async fn active_rows_of(&self, user_id: &str) -> Vec<TimeEntryRow> {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| row.user_id == user_id && row.deleted_at.is_none())
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        self.rows
            .write()
            .await
            .insert(row.time_entry_id.clone(), row);
        Ok(())
    }

    async fn patch(
        &self,
        time_entry_id: &str,
        patch: TimeEntryPatch,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(time_entry_id)
            .ok_or_else(|| anyhow::anyhow!("no projected row for time entry {time_entry_id}"))?;
        if row.last_event_id.as_deref() == Some(last_event_id) {
            return Ok(());
        }
        row.apply_patch(patch, last_event_id.to_string());
        Ok(())
    }

    async fn soft_delete(
        &self,
        time_entry_id: &str,
        deleted_at: i64,
        deleted_by: &str,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(time_entry_id)
            .ok_or_else(|| anyhow::anyhow!("no projected row for time entry {time_entry_id}"))?;
        if row.last_event_id.as_deref() == Some(last_event_id) {
            return Ok(());
        }
        row.deleted_at = Some(deleted_at);
        row.updated_at = deleted_at;
        row.updated_by = deleted_by.to_string();
        row.last_event_id = Some(last_event_id.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections")?;
        let mut items = self.active_rows_of(user_id).await;

        items.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        if sort_by_start_time_desc {
            items.reverse();
        }

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(TimeEntryView::from)
            .collect())
    }

    async fn list_by_user_starting_between(
        &self,
        user_id: &str,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections")?;
        let mut items: Vec<_> = self
            .active_rows_of(user_id)
            .await
            .into_iter()
            .filter(|row| row.start_time >= from && row.start_time < to)
            .collect();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(items.into_iter().map(TimeEntryView::from).collect())
    }

    async fn get_by_id(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .get(time_entry_id)
            .filter(|row| row.deleted_at.is_none())
            .cloned()
            .map(TimeEntryView::from))
    }
}
