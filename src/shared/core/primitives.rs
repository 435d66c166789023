// Time primitives shared by every module.
//
// Timestamps
// - All i64 values are epoch milliseconds in UTC.
// - Durations are rendered as HH:MM:SS, hours may grow past 99.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// 0001-01-01T00:00:00Z
pub const MIN_INSTANT_MS: i64 = -62_135_596_800_000;
/// 9999-12-31T23:59:59.999Z
pub const MAX_INSTANT_MS: i64 = 253_402_300_799_999;

pub fn is_supported_instant(instant_ms: i64) -> bool {
    (MIN_INSTANT_MS..=MAX_INSTANT_MS).contains(&instant_ms)
}

/// Length of `start..end` in milliseconds, zero when inverted.
pub fn span_millis(start_ms: i64, end_ms: i64) -> i64 {
    end_ms.saturating_sub(start_ms).max(0)
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_hms(duration_ms: i64) -> String {
    let total_seconds = duration_ms.max(0) / MILLIS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn parse_hms(value: &str) -> Option<i64> {
    let mut parts = value.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }
    Some(hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE + seconds * MILLIS_PER_SECOND)
}

/// `HH:MM:SS` -> `HH:MM hrs`
pub fn format_hm_total(hms: &str) -> String {
    let mut parts = hms.splitn(3, ':');
    let hours = parts.next().unwrap_or("00");
    let minutes = parts.next().unwrap_or("00");
    format!("{hours}:{minutes} hrs")
}

/// Midnight of the UTC day containing `instant_ms`, and the following midnight.
pub fn day_bounds(instant_ms: i64) -> Option<(i64, i64)> {
    if !is_supported_instant(instant_ms) {
        return None;
    }
    let start = instant_ms.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY;
    Some((start, start.checked_add(MILLIS_PER_DAY)?))
}

/// Turn wall clock times on a day into an interval. An end earlier than the
/// start belongs to the next day.
pub fn clock_span(day_ms: i64, start: &str, end: &str) -> Option<(i64, i64)> {
    let (day_start, _) = day_bounds(day_ms)?;
    let day: DateTime<Utc> = Utc.timestamp_millis_opt(day_start).single()?;
    let start_time = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    let end_time = NaiveTime::parse_from_str(end, "%H:%M").ok()?;

    let start_at = day.date_naive().and_time(start_time).and_utc();
    let mut end_at = day.date_naive().and_time(end_time).and_utc();
    if end_at < start_at {
        end_at += Duration::days(1);
    }
    Some((start_at.timestamp_millis(), end_at.timestamp_millis()))
}
