// Reconciliation of provider events against local time entries.
//
// Invariants
// - A shadow event with the same start, end and a local description equal to
//   its title is the same work and is hidden.
// - Intervals are half-open, touching ranges do not overlap.

use serde::Serialize;

use crate::modules::calendar::core::shadow_event::ShadowEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::{format_hms, span_millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledEvent {
    #[serde(flatten)]
    pub event: ShadowEvent,
    pub duration: String,
    pub overlaps_local: bool,
}

pub fn overlaps(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < b_end && b_start < a_end
}

pub fn is_duplicate(shadow: &ShadowEvent, local: &TimeEntryView) -> bool {
    shadow.start_time == local.start_time
        && shadow.end_time == local.end_time
        && shadow.title == local.description
}

pub fn reconcile(shadows: Vec<ShadowEvent>, locals: &[TimeEntryView]) -> Vec<ReconciledEvent> {
    shadows
        .into_iter()
        .filter(|shadow| !locals.iter().any(|local| is_duplicate(shadow, local)))
        .map(|event| {
            let overlaps_local = locals.iter().any(|local| {
                overlaps(
                    event.start_time,
                    event.end_time,
                    local.start_time,
                    local.end_time,
                )
            });
            ReconciledEvent {
                duration: format_hms(span_millis(event.start_time, event.end_time)),
                event,
                overlaps_local,
            }
        })
        .collect()
}
