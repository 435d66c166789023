// Calendar provider port.
//
// Purpose
// - Read events of the employee's external calendar.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::calendar::core::shadow_event::ShadowEvent;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar provider rejected the credentials")]
    Unauthorized,

    #[error("calendar request failed: {0}")]
    Request(String),

    #[error("unexpected calendar payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Events still running or starting after `from`, ordered by start.
    async fn upcoming(&self, from: i64, max_results: usize)
    -> Result<Vec<ShadowEvent>, CalendarError>;

    async fn event(&self, external_id: &str) -> Result<Option<ShadowEvent>, CalendarError>;
}
