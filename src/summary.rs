use crate::aggregate::Aggregates;
use crate::config::{PHRASE_FILE, ReportConfig};
use crate::country::Country;
use crate::phrases::{PhraseCount, top_phrases};

/// Renders the console summary printed after a run.
pub fn render_summary(
    raw_count: usize,
    unique_count: usize,
    agg: &Aggregates,
    phrases: &[PhraseCount],
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Total raw tweets: {raw_count}\n"));
    out.push_str(&format!("Total unique tweets: {unique_count}\n"));

    out.push_str(&format!(
        "\n=== Top {} countries by tweet volume ===\n",
        config.top_countries
    ));
    for (country, count) in agg.sorted_countries().into_iter().take(config.top_countries) {
        out.push_str(&format!("{country}\t{count}\n"));
    }

    out.push_str(&format!(
        "\n=== Top {} months by tweet volume ===\n",
        config.top_months
    ));
    for (month, count) in agg.sorted_months().into_iter().take(config.top_months) {
        out.push_str(&format!("{month}\t{count}\n"));
    }

    out.push_str(&format!(
        "\n=== Top {} hashtags by country ===\n",
        config.top_hashtags
    ));
    for (country, tags) in agg.top_hashtags(config.top_hashtags) {
        out.push_str(&format!("[{country}]\n"));
        for (tag, count) in tags {
            out.push_str(&format!("  {tag}\t{count}\n"));
        }
    }

    out.push_str("\n=== Average sentiment (only rows with sentiment_score) ===\n");
    for (country, stat) in &agg.sentiment_by_country {
        if let Some(avg) = stat.average() {
            out.push_str(&format!("{country}\t{avg}\n"));
        }
    }

    out.push_str(&format!(
        "\n=== {} average sentiment by month (filtered labels) ===\n",
        Country::India
    ));
    if agg.india_sentiment_by_month.is_empty() {
        out.push_str(&format!("(no sentiment data for {})\n", Country::India));
    } else {
        for row in &agg.india_sentiment_by_month {
            out.push_str(&format!(
                "{}\t{}\t(count={})\n",
                row.month_label, row.average, row.count
            ));
        }
    }

    if !phrases.is_empty() {
        out.push_str(&format!(
            "\n=== Top {} phrases from {PHRASE_FILE} ===\n",
            config.top_phrases
        ));
        for pc in top_phrases(phrases, None, config.top_phrases) {
            out.push_str(&format!("{}\t{}\n", pc.count, pc.phrase));
        }

        out.push_str(&format!(
            "\n=== Top {} phrases containing '{}' ===\n",
            config.top_phrases,
            Country::India
        ));
        let needle = Country::India.as_str();
        for pc in top_phrases(phrases, Some(needle), config.top_phrases) {
            out.push_str(&format!("{}\t{}\n", pc.count, pc.phrase));
        }
    }
    out
}
