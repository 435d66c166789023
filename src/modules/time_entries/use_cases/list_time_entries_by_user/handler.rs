// Projector: translates events into mutations, persists them, and advances the watermark.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeEntryEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Update {
                    time_entry_id,
                    patch,
                    last_event_id,
                } => {
                    self.repository
                        .patch(&time_entry_id, patch, &last_event_id)
                        .await?
                }
                Mutation::SoftDelete {
                    time_entry_id,
                    deleted_at,
                    deleted_by,
                    last_event_id,
                } => {
                    self.repository
                        .soft_delete(&time_entry_id, deleted_at, &deleted_by, &last_event_id)
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        tracing::debug!(projector = %self.name, stream_id, version, "projected event");
        Ok(())
    }

    /// Apply events appended by a command, in order.
    pub async fn apply_appended(
        &self,
        stream_id: &str,
        appended: &[(i64, TimeEntryEvent)],
    ) -> anyhow::Result<()> {
        for (version, event) in appended {
            self.apply_one(stream_id, *version, event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod time_entry_projector_runner_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
    use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
    use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
    use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
    use crate::tests::fixtures::events::time_entry_registered_v1::make_time_entry_registered_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (TimeEntryRegisteredV1, InMemoryProjections) {
        (make_time_entry_registered_v1_event(), InMemoryProjections::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_mutations_to_the_repository(
        before_each: (TimeEntryRegisteredV1, InMemoryProjections),
    ) {
        let (event, store) = before_each;
        let st = Arc::new(store);
        let projector = Projector::new("projector-name", st.clone(), st.clone());
        projector
            .apply_one("time-entries-0001", 1, &TimeEntryEvent::TimeEntryRegisteredV1(event))
            .await
            .expect("apply_one failed");
        assert_eq!(
            st.get("projector-name").await.unwrap(),
            Some(String::from("time-entries-0001:1"))
        );
        assert!(st.get_by_id("te-fixed-0001").await.unwrap().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_every_appended_event(
        before_each: (TimeEntryRegisteredV1, InMemoryProjections),
    ) {
        let (event, store) = before_each;
        let st = Arc::new(store);
        let projector = Projector::new("projector-name", st.clone(), st.clone());
        let appended = vec![
            (1, TimeEntryEvent::TimeEntryRegisteredV1(event)),
            (
                2,
                TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
                    time_entry_id: "te-fixed-0001".into(),
                    deleted_at: 1_700_000_900_000,
                    deleted_by: "user-fixed-0001".into(),
                }),
            ),
        ];
        projector
            .apply_appended("time-entries-0001", &appended)
            .await
            .unwrap();
        assert!(st.get_by_id("te-fixed-0001").await.unwrap().is_none());
        assert_eq!(
            st.get("projector-name").await.unwrap(),
            Some(String::from("time-entries-0001:2"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(
        before_each: (TimeEntryRegisteredV1, InMemoryProjections),
    ) {
        let (event, mut store) = before_each;
        store.toggle_offline();
        let st = Arc::new(store);
        let projector = Projector::new("projector-name", st.clone(), st);
        let result = projector
            .apply_one("time-entries-0001", 1, &TimeEntryEvent::TimeEntryRegisteredV1(event))
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Projections repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_watermark_repository_is_offline(
        before_each: (TimeEntryRegisteredV1, InMemoryProjections),
    ) {
        let (event, store) = before_each;
        let mut watermark_repository = InMemoryProjections::new();
        watermark_repository.toggle_offline();
        let projector = Projector::new("projector-name", Arc::new(store), Arc::new(watermark_repository));
        let result = projector
            .apply_one("time-entries-0001", 1, &TimeEntryEvent::TimeEntryRegisteredV1(event))
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Watermark repository offline")
        );
    }
}
