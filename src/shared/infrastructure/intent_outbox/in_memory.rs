use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending row. Rows already seen stay deduplicated.
    pub async fn drain(&self) -> Vec<OutboxRow> {
        std::mem::take(&mut *self.rows.lock().await)
    }

    pub async fn pending(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if row.topic.trim().is_empty() {
            return Err(OutboxError::Validation("topic must not be empty".into()));
        }
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
