use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Placeholder shown wherever a date or time has not been picked yet.
pub const NOT_SELECTED: &str = "Not selected";

/// Overlay a wall-clock time onto a calendar date. The naive types carry no
/// timezone, so the result stays in whatever local zone the inputs came from.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Strict ordering; `false` whenever either operand is absent.
pub fn is_after(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Strict ordering; `false` whenever either operand is absent.
#[allow(dead_code)]
pub fn is_before(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Calendar offset, negative values step backwards.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => NOT_SELECTED.to_string(),
    }
}

pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format("%I:%M %p").to_string(),
        None => NOT_SELECTED.to_string(),
    }
}
