//! CSV report files written under `<root>/output/`.
//!
//! Every file starts with an unquoted header row. Country, month and hashtag
//! cells in the hashtag, sentiment and country-month reports are always
//! double-quoted; counts and averages are written bare.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::QuoteStyle;
use log::info;
use serde::Serialize;

use crate::aggregate::Aggregates;
use crate::config::{
    COUNTRY_COUNTS_FILE, COUNTRY_MONTH_COUNTS_FILE, INDIA_SENTIMENT_FILE, MONTH_COUNTS_FILE,
    ReportConfig,
};
use crate::error::{AnalysisError, Result};

/// Wraps a text cell in double quotes, doubling any quote inside it. Used with
/// [`QuoteStyle::Never`] so text cells are quoted even when they look numeric
/// while counts stay bare.
fn quoted(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[derive(Serialize)]
struct CountryCountRow<'a> {
    country: &'a str,
    tweet_count: usize,
}

#[derive(Serialize)]
struct MonthCountRow {
    month: String,
    tweet_count: usize,
}

#[derive(Serialize)]
struct HashtagRow {
    country: String,
    hashtag: String,
    count: usize,
}

#[derive(Serialize)]
struct MonthSentimentRow {
    month_label: String,
    average_sentiment: f64,
    tweet_count: usize,
}

#[derive(Serialize)]
struct CountryMonthRow {
    country: String,
    month: String,
    tweet_count: usize,
}

/// Creates `path`, writes the header row and returns a writer for the data
/// rows using `quote_style`.
fn report_writer(
    path: &Path,
    header: &[&str],
    quote_style: QuoteStyle,
) -> Result<csv::Writer<File>> {
    let mut file = File::create(path).map_err(|e| AnalysisError::io(path, e))?;
    {
        let mut head = csv::Writer::from_writer(&mut file);
        head.write_record(header)
            .map_err(|e| AnalysisError::csv(path, e))?;
        head.flush().map_err(|e| AnalysisError::io(path, e))?;
    }
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .from_writer(file))
}

fn write_rows<T: Serialize>(
    path: &Path,
    header: &[&str],
    quote_style: QuoteStyle,
    rows: impl IntoIterator<Item = T>,
) -> Result<()> {
    let mut wtr = report_writer(path, header, quote_style)?;
    for row in rows {
        wtr.serialize(row).map_err(|e| AnalysisError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| AnalysisError::io(path, e))?;
    Ok(())
}

/// `country,tweet_count`, most tweets first.
pub fn write_country_counts(path: &Path, agg: &Aggregates) -> Result<()> {
    let rows = agg.sorted_countries();
    write_rows(
        path,
        &["country", "tweet_count"],
        QuoteStyle::Necessary,
        rows.iter().map(|(country, count)| CountryCountRow {
            country: country.as_str(),
            tweet_count: *count,
        }),
    )
}

/// `month,tweet_count`, most tweets first.
pub fn write_month_counts(path: &Path, agg: &Aggregates) -> Result<()> {
    write_rows(
        path,
        &["month", "tweet_count"],
        QuoteStyle::Necessary,
        agg.sorted_months()
            .into_iter()
            .map(|(month, count)| MonthCountRow {
                month,
                tweet_count: count,
            }),
    )
}

/// `country,hashtag,count`, the top `top_n` hashtags of each country.
pub fn write_hashtag_top(path: &Path, agg: &Aggregates, top_n: usize) -> Result<()> {
    let mut rows = Vec::new();
    for (country, tags) in agg.top_hashtags(top_n) {
        for (hashtag, count) in tags {
            rows.push(HashtagRow {
                country: quoted(country.as_str()),
                hashtag: quoted(&hashtag),
                count,
            });
        }
    }
    write_rows(
        path,
        &["country", "hashtag", "count"],
        QuoteStyle::Never,
        rows,
    )
}

/// `month_label,average_sentiment,tweet_count` for India, by label.
pub fn write_india_sentiment(path: &Path, agg: &Aggregates) -> Result<()> {
    write_rows(
        path,
        &["month_label", "average_sentiment", "tweet_count"],
        QuoteStyle::Never,
        agg.india_sentiment_by_month
            .iter()
            .map(|row| MonthSentimentRow {
                month_label: quoted(&row.month_label),
                average_sentiment: row.average,
                tweet_count: row.count,
            }),
    )
}

/// `country,month,tweet_count`, months ascending within each country.
pub fn write_country_month_counts(path: &Path, agg: &Aggregates) -> Result<()> {
    write_rows(
        path,
        &["country", "month", "tweet_count"],
        QuoteStyle::Never,
        agg.country_month_rows()
            .into_iter()
            .map(|(country, month, count)| CountryMonthRow {
                country: quoted(country.as_str()),
                month: quoted(&month),
                tweet_count: count,
            }),
    )
}

/// Writes all five reports into `out_dir`, creating it when missing.
/// Returns the written paths in a fixed order.
pub fn write_reports(
    out_dir: &Path,
    agg: &Aggregates,
    config: &ReportConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| AnalysisError::io(out_dir, e))?;

    let country = out_dir.join(COUNTRY_COUNTS_FILE);
    write_country_counts(&country, agg)?;
    let month = out_dir.join(MONTH_COUNTS_FILE);
    write_month_counts(&month, agg)?;
    let hashtags = out_dir.join(config.hashtag_file_name());
    write_hashtag_top(&hashtags, agg, config.top_hashtags)?;
    let sentiment = out_dir.join(INDIA_SENTIMENT_FILE);
    write_india_sentiment(&sentiment, agg)?;
    let country_month = out_dir.join(COUNTRY_MONTH_COUNTS_FILE);
    write_country_month_counts(&country_month, agg)?;

    info!("Wrote reports to {}", out_dir.display());
    Ok(vec![country, month, hashtags, sentiment, country_month])
}
