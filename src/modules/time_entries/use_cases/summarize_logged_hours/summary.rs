// Today's logged hours: the entries started on one UTC day and their total.

use serde::Serialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::{format_hm_total, format_hms, span_millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedHoursSummary {
    pub day_start: i64,
    pub total: String,
    pub total_display: String,
    pub entries: Vec<TimeEntryView>,
}

pub fn summarize(day_start: i64, entries: Vec<TimeEntryView>) -> LoggedHoursSummary {
    let total_ms = entries
        .iter()
        .map(|e| span_millis(e.start_time, e.end_time))
        .fold(0_i64, i64::saturating_add);
    let total = format_hms(total_ms);
    LoggedHoursSummary {
        day_start,
        total_display: format_hm_total(&total),
        total,
        entries,
    }
}

#[cfg(test)]
mod logged_hours_summary_tests {
    use super::*;
    use crate::tests::fixtures::rows::make_time_entry_row;
    use rstest::rstest;

    #[rstest]
    fn it_should_total_the_durations_of_the_day() {
        let mut long = make_time_entry_row("te-2", 10_000);
        long.end_time = long.start_time + 2 * 3_600_000 + 15 * 60_000;
        let entries = vec![
            TimeEntryView::from(make_time_entry_row("te-1", 0)),
            TimeEntryView::from(long),
        ];

        let summary = summarize(0, entries);
        assert_eq!(summary.total, "02:16:00");
        assert_eq!(summary.total_display, "02:16 hrs");
        assert_eq!(summary.entries.len(), 2);
    }

    #[rstest]
    fn it_should_report_zero_for_an_empty_day() {
        let summary = summarize(0, vec![]);
        assert_eq!(summary.total, "00:00:00");
        assert_eq!(summary.total_display, "00:00 hrs");
    }
}
