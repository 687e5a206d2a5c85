use chrono::{DateTime, Datelike as _, NaiveDate, NaiveDateTime, Utc};

/// Displayed in place of a year when the release date can't be parsed.
pub const INVALID_YEAR: &str = "Invalid";

/// Extract the calendar year from a release date.
///
/// Accepts RFC 3339 timestamps (taking the year in UTC), zone-less
/// `YYYY-MM-DDTHH:MM:SS` timestamps, and plain `YYYY-MM-DD` dates. Anything
/// else yields `None`.
pub fn derive_year(release_date: &str) -> Option<i32> {
    let release_date = release_date.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(release_date) {
        return Some(date_time.with_timezone(&Utc).year());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(release_date, "%Y-%m-%dT%H:%M:%S") {
        return Some(date_time.year());
    }
    NaiveDate::parse_from_str(release_date, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// The year of `release_date` for display, or [`INVALID_YEAR`].
pub fn year_label(release_date: &str) -> String {
    derive_year(release_date)
        .map(|year| year.to_string())
        .unwrap_or_else(|| INVALID_YEAR.to_string())
}
