use std::collections::HashSet;

use crate::record::TweetRecord;

/// Drops records whose [`identity_key`](TweetRecord::identity_key) was already
/// seen, keeping the first occurrence and the input order.
///
/// Distinct tweets sharing country, timestamp or month label and exact text
/// collapse into one; the source data has no real identifier to tell them apart.
pub fn dedupe(records: Vec<TweetRecord>) -> Vec<TweetRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.identity_key()))
        .collect()
}
