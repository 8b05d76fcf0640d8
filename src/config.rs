//! Report sizes and the fixed file names the pipeline reads and writes.

/// Directory (under the data root) receiving all report files. Files inside a
/// directory with this name are never ingested.
pub const OUTPUT_DIR: &str = "output";

/// Optional auxiliary phrase-count file, looked up at the data root.
pub const PHRASE_FILE: &str = "india_phrases.txt";

pub const COUNTRY_COUNTS_FILE: &str = "country_tweet_counts.csv";
pub const MONTH_COUNTS_FILE: &str = "month_tweet_counts.csv";
pub const INDIA_SENTIMENT_FILE: &str = "india_sentiment_by_month.csv";
pub const COUNTRY_MONTH_COUNTS_FILE: &str = "country_month_tweet_counts.csv";

/// Top-N sizes used by the aggregation, export and summary layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub top_countries: usize,
    pub top_months: usize,
    pub top_hashtags: usize,
    pub top_phrases: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            top_countries: 5,
            top_months: 10,
            top_hashtags: 5,
            top_phrases: 20,
        }
    }
}

impl ReportConfig {
    /// File name of the per-country hashtag report, e.g. `hashtag_top5_by_country.csv`.
    pub fn hashtag_file_name(&self) -> String {
        format!("hashtag_top{}_by_country.csv", self.top_hashtags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hashtag_file_name() {
        assert_eq!(
            ReportConfig::default().hashtag_file_name(),
            "hashtag_top5_by_country.csv"
        );
    }
}
