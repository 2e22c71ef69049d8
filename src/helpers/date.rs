//! Date helper functions

use chrono::{DateTime, NaiveDateTime};

/// Parse a date as returned by the content API.
///
/// Accepts RFC 3339 timestamps as well as the offset-less
/// `YYYY-MM-DDTHH:MM:SS` form WordPress emits.
pub fn parse_api_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDateTime, format: &str) -> String {
    let datetime = date.format("%Y-%m-%dT%H:%M:%S").to_string();
    let display = format_date(date, format);
    format!(r#"<time datetime="{}">{}</time>"#, datetime, display)
}

/// Render an API date string as a <time> element, falling back to the raw text
pub fn api_time_tag(raw: &str, format: &str) -> String {
    match parse_api_date(raw) {
        Some(date) => time_tag(&date, format),
        None => super::html_escape(raw),
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
        ("SSS", "%3f"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = sample();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date, "MMMM DD, YYYY"), "January 15, 2024");
    }

    #[test]
    fn test_parse_api_date() {
        assert_eq!(parse_api_date("2024-01-15T10:30:00"), Some(sample()));
        assert_eq!(parse_api_date("2024-01-15T10:30:00+00:00"), Some(sample()));
        assert_eq!(parse_api_date("yesterday"), None);
    }

    #[test]
    fn test_api_time_tag() {
        assert_eq!(
            api_time_tag("2024-01-15T10:30:00", "YYYY-MM-DD"),
            r#"<time datetime="2024-01-15T10:30:00">2024-01-15</time>"#
        );
        assert_eq!(api_time_tag("<soon>", "YYYY"), "&lt;soon&gt;");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
    }
}
