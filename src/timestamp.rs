use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;

/// Twitter's `created_at` layout, e.g. `Wed Dec 08 04:25:46 +0000 2021`.
const TWITTER_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Exact shape of [`TWITTER_FORMAT`]. chrono alone also takes full day and
/// month names in any case, and padding-free fields.
static TWITTER_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{2} [A-Z][a-z]{2} [0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4} [0-9]{4}$")
        .expect("valid timestamp shape regex")
});

/// Parses a Twitter `created_at` value into its wall-clock date-time.
///
/// The offset is dropped, not applied: `04:25:46 +0530` stays `04:25:46`.
/// Malformed, truncated or padded input yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !TWITTER_SHAPE_RE.is_match(raw) {
        return None;
    }
    DateTime::parse_from_str(raw, TWITTER_FORMAT)
        .ok()
        .map(|zoned| zoned.naive_local())
}
