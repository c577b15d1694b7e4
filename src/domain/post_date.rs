use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Attempt to read a calendar date out of the shapes that show up in post
/// metadata: plain dates, RFC 3339 timestamps, naive timestamps and the long
/// display form this site renders.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%B %d, %Y") {
        return Some(date);
    }
    None
}

/// Long display form, e.g. `March 2, 2024`. Unparseable input passes through
/// unchanged so a hand-written date still renders as written.
pub fn display_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Calendar-date-only form used in stored front matter, e.g. `2024-03-02`.
pub fn calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Sort key for post ordering. Unparseable input maps to the epoch so those
/// posts sort behind every dated one.
pub fn sort_timestamp(raw: &str) -> i64 {
    match parse_calendar_date(raw) {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc().timestamp(),
        None => 0,
    }
}
