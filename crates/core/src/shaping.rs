//! Presentation helpers used when shaping rows into API items.

use crate::types::Timestamp;

/// Maximum characters kept in a text preview (before the ellipsis).
pub const PREVIEW_LENGTH: usize = 150;

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Human-relative description of `then` as seen from `now`.
///
/// `None` reads as `"Never"`. Timestamps less than a minute old, or in the
/// future, read as `"just now"`. Months are 30 days and years 365 days.
pub fn time_ago(then: Option<Timestamp>, now: Timestamp) -> String {
    let Some(then) = then else {
        return "Never".to_string();
    };

    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let (n, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if hours < 24 {
        (hours, "hour")
    } else if days < 30 {
        (days, "day")
    } else if days < 365 {
        (days / 30, "month")
    } else {
        (days / 365, "year")
    };

    let plural = if n == 1 { "" } else { "s" };
    format!("{n} {unit}{plural} ago")
}

/// Cut `text` to at most `max` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate_preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}{ELLIPSIS}", cut.trim_end())
}

/// `"2h 15m"`, `"2h"`, `"45m"`. Non-positive durations read as `"0m"`.
pub fn format_duration(minutes: i32) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn never_when_absent() {
        assert_eq!(time_ago(None, now()), "Never");
    }

    #[test]
    fn just_now_under_a_minute_and_for_future() {
        assert_eq!(time_ago(Some(now() - Duration::seconds(30)), now()), "just now");
        assert_eq!(time_ago(Some(now() + Duration::hours(2)), now()), "just now");
    }

    #[test]
    fn units_and_plurals() {
        let cases = [
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::days(29), "29 days ago"),
            (Duration::days(30), "1 month ago"),
            (Duration::days(300), "10 months ago"),
            (Duration::days(365), "1 year ago"),
            (Duration::days(800), "2 years ago"),
        ];
        for (ago, expected) in cases {
            assert_eq!(time_ago(Some(now() - ago), now()), expected);
        }
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_preview("short", 10), "short");
        assert_eq!(truncate_preview("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_preview("hello world again", 11), "hello world...");
        assert_eq!(truncate_preview("hello world again", 6), "hello...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_preview("ñandú ñandú", 5), "ñandú...");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(135), "2h 15m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(-5), "0m");
    }
}
