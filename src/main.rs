#![forbid(unsafe_code)]
//! # Tweet Analysis CLI
//!
//! Command-line interface for the `tweet_analysis` crate. Point it at a data
//! directory of tweet CSV exports; it prints a summary and writes CSV reports
//! into `<dir>/output/`.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/data --top-hashtags 10
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) for progress logging.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use tweet_analysis::{ReportConfig, analyze_dir, print_failed_files};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Data directory containing the tweet CSV files
    path: Option<PathBuf>,

    /// Number of countries listed in the summary
    #[arg(long, default_value_t = 5)]
    top_countries: usize,

    /// Number of months listed in the summary
    #[arg(long, default_value_t = 10)]
    top_months: usize,

    /// Number of hashtags per country (summary and report)
    #[arg(long, default_value_t = 5)]
    top_hashtags: usize,

    /// Number of phrases listed from india_phrases.txt
    #[arg(long, default_value_t = 20)]
    top_phrases: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let Some(data_dir) = cli.path else {
        println!("Usage: tweet_analysis <data directory path>");
        return;
    };
    if !data_dir.is_dir() {
        println!("Data directory not found: {}", data_dir.display());
        return;
    }

    let config = ReportConfig {
        top_countries: cli.top_countries,
        top_months: cli.top_months,
        top_hashtags: cli.top_hashtags,
        top_phrases: cli.top_phrases,
    };

    match analyze_dir(&data_dir, &config) {
        Ok(report) => {
            if !report.failed_files.is_empty() {
                print_failed_files(&report.failed_files);
            }
            println!("{}", report.summary);
        }
        Err(e) => {
            error!("Error: {}", e);
            eprintln!("Analysis aborted: {} ({})", e, e.kind());
            process::exit(1);
        }
    }
}
