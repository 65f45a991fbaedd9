//! Timestamp parsing and conversion functions
//!
//! Accepts unix seconds, unix milliseconds (detected by magnitude), RFC 3339,
//! or `YYYY-MM-DD [HH:MM:SS]` (assumed UTC) and renders the moment every way
//! the tool displays it. `now` is always a parameter so the functions stay
//! deterministic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// One moment, rendered in all supported notations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampOutput {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub utc: String,
    pub iso8601: String,
    pub weekday: String,
    /// Human distance from the caller-supplied `now` ("3 hours ago").
    pub relative: String,
}

/// Millisecond timestamps are detected by magnitude: anything at or above
/// this is treated as millis (2001-09-09 in seconds, plainly out of range
/// for a seconds value someone would paste today).
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

fn render(dt: DateTime<Utc>, now: i64) -> TimestampOutput {
    TimestampOutput {
        unix_seconds: dt.timestamp(),
        unix_millis: dt.timestamp_millis(),
        utc: dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        iso8601: dt.to_rfc3339(),
        weekday: dt.weekday().to_string(),
        relative: relative_description(dt.timestamp(), now),
    }
}

/// Describe the distance between `timestamp` and `now`, both unix seconds.
pub fn relative_description(timestamp: i64, now: i64) -> String {
    let delta = now - timestamp;
    if delta == 0 {
        return "now".to_string();
    }

    let magnitude = delta.unsigned_abs();
    let (value, unit) = match magnitude {
        m if m < 60 => (m, "second"),
        m if m < 3_600 => (m / 60, "minute"),
        m if m < 86_400 => (m / 3_600, "hour"),
        m if m < 2_592_000 => (m / 86_400, "day"),
        m if m < 31_536_000 => (m / 2_592_000, "month"),
        m => (m / 31_536_000, "year"),
    };

    let plural = if value == 1 { "" } else { "s" };
    if delta > 0 {
        format!("{value} {unit}{plural} ago")
    } else {
        format!("in {value} {unit}{plural}")
    }
}

/// Parse any supported notation into a [`TimestampOutput`].
pub fn parse_timestamp(input: &str, now: i64) -> Result<TimestampOutput, String> {
    let input = input.trim();

    // Bare integer: unix seconds or milliseconds.
    if let Ok(numeric) = input.parse::<i64>() {
        let dt = if numeric.abs() >= MILLIS_THRESHOLD {
            DateTime::<Utc>::from_timestamp_millis(numeric)
        } else {
            DateTime::<Utc>::from_timestamp(numeric, 0)
        };
        return dt
            .map(|dt| render(dt, now))
            .ok_or_else(|| format!("Timestamp out of range: {numeric}"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(render(dt.with_timezone(&Utc), now));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(render(naive.and_utc(), now));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("Invalid date: {input}"))?;
        return Ok(render(naive.and_utc(), now));
    }

    Err(format!(
        "Unrecognized timestamp: '{input}'. Expected unix seconds/millis, RFC 3339, or YYYY-MM-DD [HH:MM:SS]"
    ))
}
