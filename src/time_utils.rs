// SPDX-License-Identifier: MIT

//! Shared helpers for parsing post timestamps and weekday labels.

use chrono::{DateTime, Utc, Weekday};

/// Twitter-style `created_at` layout, e.g. `Mon Jan 01 08:00:00 +0000 2024`.
const POST_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a post timestamp into UTC.
///
/// The saved datasets use the Twitter `created_at` layout; RFC 2822 and
/// RFC 3339 are accepted as fallbacks so re-exported datasets parse too.
pub fn parse_post_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, POST_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Fixed weekday iteration order for reports (week starts on Sunday).
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Three-letter weekday abbreviation used in report rows.
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Whether a weekday abbreviation falls on the weekend.
pub fn is_weekend(abbrev: &str) -> bool {
    matches!(abbrev, "Sat" | "Sun")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parses_twitter_created_at() {
        let ts = parse_post_timestamp("Mon Jan 01 08:00:00 +0000 2024").unwrap();
        assert_eq!(ts.weekday(), Weekday::Mon);
        assert_eq!(ts.year(), 2024);
    }

    #[test]
    fn test_parses_rfc3339_fallback() {
        let ts = parse_post_timestamp("2024-01-01T08:00:00Z").unwrap();
        assert_eq!(ts.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_post_timestamp("not a date").is_none());
        assert!(parse_post_timestamp("").is_none());
    }

    #[test]
    fn test_weekday_order_starts_sunday() {
        assert_eq!(weekday_abbrev(WEEKDAY_ORDER[0]), "Sun");
        assert_eq!(weekday_abbrev(WEEKDAY_ORDER[6]), "Sat");
    }
}
