//! ISO-8601 helpers for party dates.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

use super::DraftError;

/// Combine separate date and time inputs, read as local wall-clock time,
/// into a UTC ISO-8601 string.
pub fn combine_date_time(date: &str, time: &str) -> Result<String, DraftError> {
    combine_date_time_in(date, time, &Local)
}

/// Combine date and time inputs read as wall-clock time in `tz`.
///
/// The result uses millisecond precision and a `Z` suffix, e.g.
/// `2025-10-19T18:30:00.000Z`. Ambiguous wall-clock times (DST fall-back)
/// resolve to the earlier instant.
pub fn combine_date_time_in<Tz: TimeZone>(
    date: &str,
    time: &str,
    tz: &Tz,
) -> Result<String, DraftError> {
    let date = date.trim();
    let time = time.trim();

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| DraftError::InvalidDate(date.to_string()))?;

    let clock = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| DraftError::InvalidTime(time.to_string()))?;

    let naive = NaiveDateTime::new(day, clock);
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DraftError::NonexistentLocalTime(naive.to_string()))?;

    Ok(local
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Calendar-date portion (`YYYY-MM-DD`) of an ISO-8601 date-time; the time
/// of day is discarded.
pub fn calendar_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => iso.chars().take(10).collect(),
    }
}
