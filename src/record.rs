use chrono::NaiveDateTime;

use crate::country::Country;

/// Month key used when a record carries neither a timestamp nor a month label.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// One tweet, regardless of the CSV layout it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetRecord {
    pub country: Country,
    /// Wall-clock creation time, for sources with a `created_at` column.
    pub created_at: Option<NaiveDateTime>,
    /// Raw tweet body; cleaning happens at aggregation time.
    pub text: String,
    pub user_location: Option<String>,
    pub sentiment_score: Option<f64>,
    /// Free-text month such as `Mar 25`, for sources without timestamps.
    pub month_label: Option<String>,
}

/// Surrogate identity of a record: country, rendered timestamp, month label
/// and raw text. Location and sentiment are not part of it. An absent month
/// label and an empty one give the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    country: Country,
    created_at: String,
    month_label: String,
    text: String,
}

impl TweetRecord {
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            country: self.country,
            created_at: self
                .created_at
                .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
                .unwrap_or_default(),
            month_label: self.month_label.clone().unwrap_or_default(),
            text: self.text.clone(),
        }
    }

    /// Grouping bucket: `YYYY-MM` from the timestamp, else the month label
    /// verbatim, else [`UNKNOWN_MONTH`].
    pub fn month_key(&self) -> String {
        match (&self.created_at, &self.month_label) {
            (Some(ts), _) => ts.format("%Y-%m").to_string(),
            (None, Some(label)) => label.clone(),
            (None, None) => UNKNOWN_MONTH.to_string(),
        }
    }
}
