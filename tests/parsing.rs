use std::fs;
use std::path::Path;
use tempfile::tempdir;

use tweet_analysis::{Country, SourceFormat, parse_timestamp, split_free_text_line};

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn header_csv_file_takes_country_from_name() {
    let dir = tempdir().expect("create tempdir");
    let path = write(
        dir.path(),
        "Japan_covid_tweets.csv",
        "created_at,text,user_location\nWed Dec 08 04:25:46 +0000 2021,こんにちは,Tokyo\n",
    );

    let format = SourceFormat::for_file_name("Japan_covid_tweets.csv");
    let records = format.parse_file(&path).expect("parse header csv");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].country, Country::Japan);
    assert_eq!(
        records[0].created_at,
        parse_timestamp("Wed Dec 08 04:25:46 +0000 2021")
    );
    assert_eq!(records[0].month_key(), "2021-12");
}

#[test]
fn unknown_country_for_unmatched_name() {
    let dir = tempdir().expect("create tempdir");
    let path = write(dir.path(), "misc.csv", "text\nhello\n");
    let records = SourceFormat::HeaderCsv.parse_file(&path).expect("parse");
    assert_eq!(records[0].country, Country::Unknown);
    assert_eq!(records[0].month_key(), "Unknown");
}

#[test]
fn free_text_file_keeps_embedded_commas() {
    let dir = tempdir().expect("create tempdir");
    let path = write(
        dir.path(),
        "india.csv",
        "id,tweet,sentiment_score,month\r\n\
         1,hello, world, again,0.5,Mar 25\r\n\
         1,onlytwo,0.5\r\n\
         \r\n\
         2,Modi addresses the nation, 8pm,not-a-number,Mar 24\r\n",
    );

    let records = SourceFormat::for_file_name("india.csv")
        .parse_file(&path)
        .expect("parse free text");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "hello, world, again");
    assert_eq!(records[0].sentiment_score, Some(0.5));
    assert_eq!(records[0].month_label.as_deref(), Some("Mar 25"));
    assert_eq!(records[1].text, "Modi addresses the nation, 8pm");
    assert_eq!(records[1].sentiment_score, None);
    assert!(records.iter().all(|r| r.country == Country::India));
}

#[test]
fn free_text_file_with_bare_cr_line_endings() {
    let dir = tempdir().expect("create tempdir");
    let path = write(
        dir.path(),
        "india_classic.csv",
        "id,tweet,sentiment,month\r1,first, tweet,0.5,Mar 25\r2,second,0.25,Mar 26\r",
    );

    let records = SourceFormat::FreeText.parse_file(&path).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "first, tweet");
    assert_eq!(records[1].month_label.as_deref(), Some("Mar 26"));
}

#[test]
fn free_text_file_with_invalid_utf8_is_read_lossily() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("India.csv");
    let mut body = b"id,tweet,sentiment,month\n1,caf".to_vec();
    body.push(0xff);
    body.extend_from_slice(b",0.1,Mar 25\n");
    fs::write(&path, body).expect("write fixture");

    let records = SourceFormat::FreeText.parse_file(&path).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "caf\u{FFFD}");
}

#[test]
fn missing_file_returns_error() {
    let dir = tempdir().expect("create tempdir");
    let missing = dir.path().join("nope.csv");
    let err = SourceFormat::HeaderCsv.parse_file(&missing).unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("nope.csv"), "Unexpected error: {err}");
}

#[test]
fn slicing_matches_file_parsing() {
    let row = split_free_text_line("42,a,b,c,d,-1.5,Apr 10").expect("valid line");
    assert_eq!(row.id, "42");
    assert_eq!(row.tweet, "a,b,c,d");
    assert_eq!(row.sentiment, "-1.5");
    assert_eq!(row.month, "Apr 10");
}
