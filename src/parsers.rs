//! Readers for the two tweet CSV layouts found in the data directory.
//!
//! - Header CSV: a regular quoted CSV with named columns (`created_at`,
//!   `text` or `tweet`, `user_location`, `sentiment_score`, `month`). Any
//!   subset of those columns may be present; other columns are ignored.
//! - Free-text CSV: `id,tweet,sentiment,month` where the tweet column is not
//!   quoted and may itself contain commas. Lines are sliced at the first comma
//!   and the last two commas instead of being tokenized. `\n`, `\r\n` and a
//!   lone `\r` all end a line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::country::Country;
use crate::error::{AnalysisError, Result};
use crate::record::TweetRecord;
use crate::text::normalize_location;
use crate::timestamp::parse_timestamp;

/// File-name token (lower-case) marking the free-text layout.
pub const FREE_TEXT_TOKEN: &str = "india";

/// Layout of a source file, chosen from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    HeaderCsv,
    FreeText,
}

impl SourceFormat {
    pub fn for_file_name(file_name: &str) -> SourceFormat {
        if file_name.to_lowercase().contains(FREE_TEXT_TOKEN) {
            SourceFormat::FreeText
        } else {
            SourceFormat::HeaderCsv
        }
    }

    /// Reads every record of `path`. Any read or structural CSV error fails the
    /// whole file; the caller decides how to recover.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<TweetRecord>> {
        let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
        match self {
            SourceFormat::HeaderCsv => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let country = Country::classify(&file_name);
                parse_header_csv(file, country).map_err(|e| AnalysisError::csv(path, e))
            }
            SourceFormat::FreeText => {
                parse_free_text(file).map_err(|e| AnalysisError::io(path, e))
            }
        }
    }
}

/// One header CSV row. `text`, `tweet` and `month` are read as plain strings
/// so an empty cell stays `""`; whether the column exists at all is tracked
/// separately in [`HeaderColumns`].
#[derive(Debug, Deserialize)]
struct HeaderRow {
    created_at: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    tweet: String,
    user_location: Option<String>,
    sentiment_score: Option<String>,
    #[serde(default)]
    month: String,
}

/// Which optional columns the header row declares.
#[derive(Debug, Clone, Copy)]
struct HeaderColumns {
    text: bool,
    month: bool,
}

impl HeaderColumns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        HeaderColumns {
            text: headers.iter().any(|h| h == "text"),
            month: headers.iter().any(|h| h == "month"),
        }
    }
}

impl HeaderRow {
    fn into_record(self, country: Country, columns: HeaderColumns) -> TweetRecord {
        TweetRecord {
            country,
            created_at: self
                .created_at
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .and_then(parse_timestamp),
            // `tweet` only stands in when there is no `text` column
            text: if columns.text { self.text } else { self.tweet },
            user_location: normalize_location(self.user_location.as_deref()),
            sentiment_score: self.sentiment_score.as_deref().and_then(parse_score),
            month_label: columns.month.then_some(self.month),
        }
    }
}

/// Parses a header CSV stream. Every record is tagged with `country`.
/// Rows with a differing field count abort the parse.
pub fn parse_header_csv<R: Read>(
    reader: R,
    country: Country,
) -> std::result::Result<Vec<TweetRecord>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .flexible(false)
        .from_reader(reader);

    let columns = HeaderColumns::from_headers(rdr.headers()?);
    rdr.deserialize::<HeaderRow>()
        .map(|row| row.map(|r| r.into_record(country, columns)))
        .collect()
}

/// The four raw fields of one free-text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeTextRow<'a> {
    pub id: &'a str,
    pub tweet: &'a str,
    pub sentiment: &'a str,
    pub month: &'a str,
}

/// Delimiter positions of a free-text line: first comma, second-to-last comma
/// and last comma. `None` unless all three exist and are strictly increasing.
fn free_text_bounds(line: &str) -> Option<(usize, usize, usize)> {
    let first = line.find(',')?;
    let last = line.rfind(',')?;
    if last <= first {
        return None;
    }
    let second_last = line[..last].rfind(',')?;
    if second_last <= first {
        return None;
    }
    Some((first, second_last, last))
}

/// Slices a free-text line into its four fields. The tweet field keeps any
/// commas it contains. Blank or under-delimited lines yield `None`.
pub fn split_free_text_line(raw_line: &str) -> Option<FreeTextRow<'_>> {
    let line = raw_line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }
    let (first, second_last, last) = free_text_bounds(line)?;
    Some(FreeTextRow {
        id: &line[..first],
        tweet: &line[first + 1..second_last],
        sentiment: &line[second_last + 1..last],
        month: &line[last + 1..],
    })
}

impl FreeTextRow<'_> {
    fn to_record(self) -> TweetRecord {
        TweetRecord {
            country: Country::India,
            created_at: None,
            text: self.tweet.to_string(),
            user_location: None,
            sentiment_score: parse_score(self.sentiment),
            month_label: Some(self.month.trim().to_string()),
        }
    }
}

/// Splits `text` into lines the way a line reader does: `\r\n`, `\n` and a
/// lone `\r` each end a line.
fn free_text_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(i) => {
                let end = if current[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
                rest = Some(&current[end..]).filter(|r| !r.is_empty());
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Parses a free-text stream. The first line is a header and is always
/// skipped; malformed lines are dropped. Invalid UTF-8 is replaced, not fatal.
pub fn parse_free_text<R: Read>(mut reader: R) -> std::io::Result<Vec<TweetRecord>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let content = String::from_utf8_lossy(&bytes);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in free_text_lines(&content).skip(1) {
        match split_free_text_line(line) {
            Some(row) => records.push(row.to_record()),
            None if line.trim().is_empty() => {}
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("skipped {skipped} malformed free-text lines");
    }
    Ok(records)
}

/// Parses a sentiment score. Non-numeric and non-finite values are absent.
fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
