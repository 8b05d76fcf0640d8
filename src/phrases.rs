use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// A phrase with its occurrence count, from a `<phrase>\t<count>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: i32,
}

/// Parses one phrase line, split at its last tab. Returns `None` for lines
/// without a tab or with a non-integer count.
pub fn parse_phrase_line(line: &str) -> Option<PhraseCount> {
    let line = line.trim();
    let (phrase, count) = line.rsplit_once('\t')?;
    let count = count.trim().parse::<i32>().ok()?;
    Some(PhraseCount {
        phrase: phrase.trim().to_string(),
        count,
    })
}

/// Loads the phrase-count file. A missing file yields an empty list.
pub fn load_phrase_counts(path: &Path) -> io::Result<Vec<PhraseCount>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let phrases: Vec<PhraseCount> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_phrase_line)
        .collect();
    debug!("{}: {} phrase counts", path.display(), phrases.len());
    Ok(phrases)
}

/// The `n` most frequent phrases, optionally restricted to those containing
/// `needle` (case-insensitive). Ties keep file order.
pub fn top_phrases<'a>(
    phrases: &'a [PhraseCount],
    needle: Option<&str>,
    n: usize,
) -> Vec<&'a PhraseCount> {
    let needle = needle.map(str::to_lowercase);
    let mut selected: Vec<&PhraseCount> = phrases
        .iter()
        .filter(|pc| match &needle {
            Some(needle) => pc.phrase.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();
    selected.sort_by(|a, b| b.count.cmp(&a.count));
    selected.truncate(n);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_tab_separated_lines() {
        assert_eq!(
            parse_phrase_line("  stay home india \t 42 "),
            Some(PhraseCount {
                phrase: "stay home india".to_string(),
                count: 42
            })
        );
        assert_eq!(
            parse_phrase_line("tab\tinside\t7").map(|p| p.phrase),
            Some("tab\tinside".to_string())
        );
        assert_eq!(parse_phrase_line("no tab 12"), None);
        assert_eq!(parse_phrase_line("bad count\tmany"), None);
    }

    #[test]
    fn counts_outside_32_bit_range_are_skipped() {
        assert_eq!(parse_phrase_line("big\t3000000000"), None);
        assert_eq!(parse_phrase_line("max\t2147483647").map(|p| p.count), Some(i32::MAX));
        assert_eq!(parse_phrase_line("negative\t-3").map(|p| p.count), Some(-3));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let phrases = load_phrase_counts(&dir.path().join("india_phrases.txt")).unwrap();
        assert!(phrases.is_empty());
    }

    #[test]
    fn loads_and_ranks_phrases() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("india_phrases.txt");
        std::fs::write(
            &path,
            "lockdown extended\t10\n\nIndia fights corona\t25\nbroken line\nincredible india\t10\n",
        )
        .unwrap();
        let phrases = load_phrase_counts(&path).unwrap();
        assert_eq!(phrases.len(), 3);

        let top: Vec<&str> = top_phrases(&phrases, None, 2)
            .iter()
            .map(|p| p.phrase.as_str())
            .collect();
        assert_eq!(top, vec!["India fights corona", "lockdown extended"]);

        let india: Vec<&str> = top_phrases(&phrases, Some("india"), 20)
            .iter()
            .map(|p| p.phrase.as_str())
            .collect();
        assert_eq!(india, vec!["India fights corona", "incredible india"]);
    }
}
