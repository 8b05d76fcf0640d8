use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::OUTPUT_DIR;
use crate::error::{AnalysisError, Result};
use crate::parsers::SourceFormat;
use crate::record::TweetRecord;

/// A file that could not be read, with a one-line `Kind: message` reason.
pub type FailedFile = (PathBuf, String);

/// All records read from a data directory, plus the files that were skipped.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<TweetRecord>,
    pub failed_files: Vec<FailedFile>,
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn in_output_dir(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().eq_ignore_ascii_case(OUTPUT_DIR))
        .unwrap_or(false)
}

/// Recursively lists `.csv` files (any case) under `root`, sorted by file name
/// within each directory. Files directly inside an `output` directory are left
/// out so earlier reports are never read back as input.
pub fn collect_csv_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AnalysisError::MissingRoot(root.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(AnalysisError::Walk(e)),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && is_csv(path) && !in_output_dir(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Reads every CSV file under `root` into one record list.
///
/// Each file is parsed on its own: a file that fails to open or parse is
/// logged, listed in `failed_files` and contributes no records.
pub fn ingest(root: &Path) -> Result<IngestReport> {
    let files = collect_csv_files(root)?;
    info!("Found {} CSV files under {}", files.len(), root.display());

    let mut report = IngestReport::default();
    for path in files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = SourceFormat::for_file_name(&file_name);
        match format.parse_file(&path) {
            Ok(mut records) => {
                debug!("{}: {} records ({:?})", path.display(), records.len(), format);
                report.records.append(&mut records);
            }
            Err(e) => {
                let reason = format!("{}: {}", e.kind(), e.detail());
                warn!("Failed to read CSV: {} -> {}", path.display(), reason);
                report.failed_files.push((path, reason));
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_csv_files_except_output() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join("Output")).unwrap();
        fs::write(root.join("japan.csv"), "text\nhi\n").unwrap();
        fs::write(root.join("nested/BRAZIL.CSV"), "text\nola\n").unwrap();
        fs::write(root.join("nested/deeper/notes.txt"), "ignore").unwrap();
        fs::write(root.join("Output/country_tweet_counts.csv"), "country\n").unwrap();

        let files = collect_csv_files(root).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["japan.csv", "BRAZIL.CSV"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_csv_files(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), "MissingRoot");
    }

    #[test]
    fn failing_file_is_isolated() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("australia.csv"), "text,created_at\nok,\nragged\n").unwrap();
        fs::write(root.join("japan.csv"), "text\nkonnichiwa\n").unwrap();
        fs::write(
            root.join("India.csv"),
            "id,tweet,sentiment,month\n1,hi, there,0.1,Mar 25\n",
        )
        .unwrap();

        let report = ingest(root).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failed_files.len(), 1);
        let (path, reason) = &report.failed_files[0];
        assert!(path.ends_with("australia.csv"));
        assert!(reason.starts_with("Csv: "), "{reason}");
        assert!(!reason.contains("australia.csv"), "{reason}");
    }
}
