//! Display helpers used by table cells and detail cards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendered in place of any value that cannot be formatted.
pub const PLACEHOLDER: &str = "N/A";

const DATE_FORMAT: &str = "%b %-d, %Y";

/// Parse the timestamp shapes the API produces into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|stamp| stamp.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// `Mar 4, 2025`, or [`PLACEHOLDER`] when the input is not a date.
pub fn format_date(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || PLACEHOLDER.to_string(),
        |date| date.format(DATE_FORMAT).to_string(),
    )
}

/// Same as [`format_date`] for optional fields.
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map_or_else(|| PLACEHOLDER.to_string(), format_date)
}

/// Payment amounts are shown with a dollar sign regardless of currency.
pub fn format_amount(amount: f64) -> String {
    format!("${}", format_number(amount))
}

/// Integral values print without a fractional part.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// `FACEBOOK` becomes `Facebook`; blank input becomes `Unknown`.
pub fn capitalize_platform(platform: &str) -> String {
    let mut chars = platform.trim().chars();
    chars.next().map_or_else(
        || "Unknown".to_string(),
        |first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    )
}

/// Avatar initial for an email or name.
pub fn initial(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |first| first.to_uppercase().collect())
}

/// First eight characters of an identifier, for compact tables.
pub fn short_id(id: &str) -> String {
    let short: String = id.chars().take(8).collect();
    if short.len() < id.len() {
        format!("{short}…")
    } else {
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_api_timestamps() {
        assert_eq!(format_date("2025-03-04T10:22:01Z"), "Mar 4, 2025");
        assert_eq!(format_date("2025-03-04T10:22:01.1234567"), "Mar 4, 2025");
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn test_invalid_dates_render_placeholder() {
        for raw in ["", "   ", "not a date", "2025-13-45", "NaN"] {
            assert_eq!(format_date(raw), PLACEHOLDER, "{raw:?}");
        }
        assert_eq!(format_optional_date(None), PLACEHOLDER);
    }

    #[test]
    fn test_amounts() {
        assert_eq!(format_amount(10.0), "$10");
        assert_eq!(format_amount(19.99), "$19.99");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(capitalize_platform("FACEBOOK"), "Facebook");
        assert_eq!(capitalize_platform("tiktok"), "Tiktok");
        assert_eq!(capitalize_platform(""), "Unknown");
    }

    #[test]
    fn test_initials_and_short_ids() {
        assert_eq!(initial("admin@omniadly.io"), "A");
        assert_eq!(initial(""), "?");
        assert_eq!(short_id("9b1deb4d-3b7d-4bad"), "9b1deb4d…");
        assert_eq!(short_id("abc"), "abc");
    }
}
