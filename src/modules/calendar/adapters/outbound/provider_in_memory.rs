use tokio::sync::RwLock;

use crate::modules::calendar::adapters::outbound::provider::{CalendarError, CalendarProvider};
use crate::modules::calendar::core::shadow_event::ShadowEvent;

#[derive(Default)]
pub struct InMemoryCalendarProvider {
    events: RwLock<Vec<ShadowEvent>>,
    is_offline: bool,
}

impl InMemoryCalendarProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<ShadowEvent>) -> Self {
        Self {
            events: RwLock::new(events),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CalendarError> {
        if self.is_offline {
            return Err(CalendarError::Request("Calendar offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CalendarProvider for InMemoryCalendarProvider {
    async fn upcoming(
        &self,
        from: i64,
        max_results: usize,
    ) -> Result<Vec<ShadowEvent>, CalendarError> {
        self.ensure_online()?;
        let mut events: Vec<_> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| e.end_time > from)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        events.truncate(max_results);
        Ok(events)
    }

    async fn event(&self, external_id: &str) -> Result<Option<ShadowEvent>, CalendarError> {
        self.ensure_online()?;
        Ok(self
            .events
            .read()
            .await
            .iter()
            .find(|e| e.external_id == external_id)
            .cloned())
    }
}
