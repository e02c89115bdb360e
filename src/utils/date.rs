use chrono::{DateTime, NaiveDate};

pub const UNKNOWN_RELEASE_DATE: &str = "Unknown Release Date";

/// Renders a TMDB release date as "Month D, YYYY" (US English).
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Absent, blank or unparseable
/// input yields [`UNKNOWN_RELEASE_DATE`].
pub fn format_release_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).and_then(parse_release_date) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => UNKNOWN_RELEASE_DATE.to_string(),
    }
}

fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
