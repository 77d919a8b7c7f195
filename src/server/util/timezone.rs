//! Client-local day bucketing for the trend reports.
//!
//! Browsers report their zone as `Date.getTimezoneOffset()`: minutes to add to local
//! time to reach UTC, so positive values are west of Greenwich. Only fixed offsets are
//! supported.

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

pub const CLIENT_TZ_OFFSET_HEADER: &str = "x-client-tz-offset";

pub const DEFAULT_REPORT_DAYS: u32 = 30;
pub const MAX_REPORT_DAYS: u32 = 365;

/// Largest offset any real zone uses, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// One local calendar day expressed as an inclusive UTC range.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRange {
    pub start: DateTime<Utc>,
    /// Local 23:59:59.999 of the same day.
    pub end: DateTime<Utc>,
    /// Local date formatted `YYYY-MM-DD`.
    pub label: String,
}

/// Reads the client offset header, falling back to UTC when absent or invalid.
pub fn client_offset(headers: &HeaderMap) -> FixedOffset {
    let minutes = headers
        .get(CLIENT_TZ_OFFSET_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i32>().ok());

    offset_from_minutes_west(minutes.unwrap_or(0))
}

/// Converts browser-convention minutes (positive west) into a `FixedOffset`.
pub fn offset_from_minutes_west(minutes: i32) -> FixedOffset {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return utc_offset();
    }

    FixedOffset::west_opt(minutes * 60).unwrap_or_else(utc_offset)
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Clamps a requested report length to `1..=365`, defaulting to 30.
pub fn clamp_days(days: Option<i64>) -> u32 {
    match days {
        None => DEFAULT_REPORT_DAYS,
        Some(days) => days.clamp(1, MAX_REPORT_DAYS as i64) as u32,
    }
}

/// The last `days` local days ending with the local day containing `now`, oldest first.
pub fn last_n_days(now: DateTime<Utc>, offset: FixedOffset, days: u32) -> Vec<DayRange> {
    let today = now.with_timezone(&offset).date_naive();

    (0..days as i64)
        .rev()
        .map(|back| day_range(today - Duration::days(back), offset))
        .collect()
}

/// The inclusive UTC range covering `date` in the given local offset.
pub fn day_range(date: NaiveDate, offset: FixedOffset) -> DayRange {
    let local_midnight = date.and_time(NaiveTime::MIN);
    let utc_midnight = local_midnight - Duration::seconds(offset.local_minus_utc() as i64);
    let start = Utc.from_utc_datetime(&utc_midnight);

    DayRange {
        start,
        end: start + Duration::days(1) - Duration::milliseconds(1),
        label: date.format("%Y-%m-%d").to_string(),
    }
}
