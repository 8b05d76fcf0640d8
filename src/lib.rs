//! # tweet_analysis
//!
//! Reads a directory tree of tweet CSV exports from several countries,
//! normalizes them into [`TweetRecord`]s, drops duplicates and produces
//! volume, hashtag and sentiment statistics.
//!
//! Two input layouts are understood:
//! - header CSV files with any of the columns `created_at`, `text`/`tweet`,
//!   `user_location`, `sentiment_score` and `month`;
//! - the India export `id,tweet,sentiment,month`, whose tweet column holds
//!   unquoted commas and is sliced by position instead.
//!
//! The country of a record comes from its file name. Reports are written as
//! CSV files into `<root>/output/`, which is itself excluded from ingestion.
//!
//! ## Example
//! ```no_run
//! use std::path::Path;
//! use tweet_analysis::{ReportConfig, analyze_dir};
//!
//! let report = analyze_dir(Path::new("data"), &ReportConfig::default()).unwrap();
//! println!("{}", report.summary);
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};

pub mod aggregate;
pub mod config;
pub mod country;
pub mod dedupe;
pub mod error;
pub mod export;
pub mod ingest;
pub mod parsers;
pub mod phrases;
pub mod record;
pub mod summary;
pub mod text;
pub mod timestamp;

pub use aggregate::{Aggregates, MonthSentiment, SentimentStat, count_items, sort_map_to_vec};
pub use config::{OUTPUT_DIR, PHRASE_FILE, ReportConfig};
pub use country::Country;
pub use dedupe::dedupe;
pub use error::{AnalysisError, Result};
pub use export::write_reports;
pub use ingest::{FailedFile, IngestReport, collect_csv_files, ingest};
pub use parsers::{FreeTextRow, SourceFormat, split_free_text_line};
pub use phrases::{PhraseCount, load_phrase_counts};
pub use record::{IdentityKey, TweetRecord, UNKNOWN_MONTH};
pub use summary::render_summary;
pub use text::{clean_text, extract_hashtags, normalize_location};
pub use timestamp::parse_timestamp;

/// Outcome of a full run over a data directory.
#[derive(Debug)]
pub struct AnalysisReport {
    /// Console summary, ready to print.
    pub summary: String,
    pub raw_count: usize,
    pub unique_count: usize,
    /// Report files, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Input files that could not be read and contributed no records.
    pub failed_files: Vec<FailedFile>,
}

/// Runs the whole pipeline on `root`: ingest, dedupe, aggregate, write the
/// reports into `<root>/output/` and render the console summary.
///
/// Unreadable input files are skipped and listed in `failed_files`; a missing
/// root or a failure while writing reports is returned as an error.
pub fn analyze_dir(root: &Path, config: &ReportConfig) -> Result<AnalysisReport> {
    let IngestReport {
        records,
        failed_files,
    } = ingest(root)?;
    let raw_count = records.len();
    let tweets = dedupe(records);
    info!("{} raw tweets, {} unique", raw_count, tweets.len());

    let agg = Aggregates::from_records(&tweets);
    let written = write_reports(&root.join(OUTPUT_DIR), &agg, config)?;

    let phrase_path = root.join(PHRASE_FILE);
    let phrases = load_phrase_counts(&phrase_path).unwrap_or_else(|e| {
        warn!("Could not read {}: {}", phrase_path.display(), e);
        Vec::new()
    });

    let summary = render_summary(raw_count, tweets.len(), &agg, &phrases, config);
    Ok(AnalysisReport {
        summary,
        raw_count,
        unique_count: tweets.len(),
        written,
        failed_files,
    })
}

/// Prints skipped input files to stderr, one line each.
pub fn print_failed_files(failed: &[FailedFile]) {
    eprintln!("\nWarnings: {} file(s) could not be read:", failed.len());
    for (path, reason) in failed {
        eprintln!("Failed to read CSV: {} -> {}", path.display(), reason);
    }
}
