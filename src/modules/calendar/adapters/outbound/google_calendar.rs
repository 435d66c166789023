// Google Calendar REST adapter.
//
// Reads `calendar/v3/calendars/{calendar_id}/events` with a bearer token that
// was obtained elsewhere. Recurring events are expanded by the API
// (`singleEvents=true`), cancelled ones are dropped.

use chrono::{DateTime, NaiveDate};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::modules::calendar::adapters::outbound::provider::{CalendarError, CalendarProvider};
use crate::modules::calendar::core::shadow_event::ShadowEvent;

const CALENDAR_API: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Deserialize)]
struct EventsListResponse {
    items: Option<Vec<RemoteEvent>>,
}

#[derive(Deserialize, Clone)]
struct RemoteEvent {
    id: String,
    status: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    start: Option<EventDateTime>,
    end: Option<EventDateTime>,
}

#[derive(Deserialize, Clone)]
struct EventDateTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}

impl EventDateTime {
    /// All day events carry only a date, read as UTC midnight.
    fn to_millis(&self) -> Option<i64> {
        if let Some(date_time) = self.date_time.as_deref() {
            return DateTime::parse_from_rfc3339(date_time)
                .ok()
                .map(|dt| dt.timestamp_millis());
        }
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
    }
}

fn to_shadow_event(event: RemoteEvent) -> Option<ShadowEvent> {
    if event.status.as_deref() == Some("cancelled") {
        return None;
    }
    let start_time = event.start.as_ref()?.to_millis()?;
    let end_time = event.end.as_ref()?.to_millis()?;
    Some(ShadowEvent {
        external_id: event.id,
        title: event.summary.unwrap_or_default(),
        description: event.description,
        start_time,
        end_time,
    })
}

pub struct GoogleCalendarProvider {
    client: Client,
    base_url: String,
    calendar_id: String,
    access_token: String,
}

impl GoogleCalendarProvider {
    pub fn new(calendar_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: CALENDAR_API.to_string(),
            calendar_id: calendar_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Ids are pushed as single, percent-encoded path segments.
    fn events_url(&self, event_id: Option<&str>) -> Result<Url, CalendarError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| CalendarError::Request(e.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CalendarError::Request(format!("{} cannot hold a path", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .push("calendars")
                .push(&self.calendar_id)
                .push("events");
            if let Some(event_id) = event_id {
                segments.push(event_id);
            }
        }
        Ok(url)
    }

    fn check_status(status: StatusCode) -> Result<(), CalendarError> {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CalendarError::Unauthorized),
            s if !s.is_success() => Err(CalendarError::Request(format!(
                "Calendar request failed: HTTP {s}"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl CalendarProvider for GoogleCalendarProvider {
    async fn upcoming(
        &self,
        from: i64,
        max_results: usize,
    ) -> Result<Vec<ShadowEvent>, CalendarError> {
        let time_min = DateTime::from_timestamp_millis(from)
            .ok_or_else(|| CalendarError::Request(format!("invalid instant {from}")))?
            .to_rfc3339();
        let max_results = max_results.to_string();

        let resp = self
            .client
            .get(self.events_url(None)?)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", time_min.as_str()),
                ("showDeleted", "false"),
                ("singleEvents", "true"),
                ("maxResults", max_results.as_str()),
                ("orderBy", "startTime"),
            ])
            .send()
            .await
            .map_err(|e| CalendarError::Request(e.to_string()))?;
        Self::check_status(resp.status())?;

        let body: EventsListResponse = resp
            .json()
            .await
            .map_err(|e| CalendarError::Decode(e.to_string()))?;
        let items = body.items.unwrap_or_default();
        let total = items.len();
        let events: Vec<_> = items.into_iter().filter_map(to_shadow_event).collect();
        tracing::debug!(total, kept = events.len(), "fetched calendar events");
        Ok(events)
    }

    async fn event(&self, external_id: &str) -> Result<Option<ShadowEvent>, CalendarError> {
        if matches!(external_id, "" | "." | "..") {
            return Ok(None);
        }
        let resp = self
            .client
            .get(self.events_url(Some(external_id))?)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| CalendarError::Request(e.to_string()))?;
        if matches!(resp.status(), StatusCode::NOT_FOUND | StatusCode::GONE) {
            return Ok(None);
        }
        Self::check_status(resp.status())?;

        let event: RemoteEvent = resp
            .json()
            .await
            .map_err(|e| CalendarError::Decode(e.to_string()))?;
        Ok(to_shadow_event(event))
    }
}
