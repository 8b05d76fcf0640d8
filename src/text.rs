use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid URL regex"));

// Anything that is not a letter, number, punctuation mark or whitespace.
static NON_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\p{P}\s]").expect("valid char-class regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Za-z_]+").expect("valid hashtag regex"));

///Cleans a tweet body for analysis.
///Decodes `&amp;`, `&lt;` and `&gt;`, blanks out URLs, replaces emoji, symbols and
///control characters with spaces, then collapses and trims whitespace.
/// # Example
/// ```
/// use tweet_analysis::clean_text;
/// let cleaned = clean_text("Tom &amp; Jerry 😀 https://t.co/x1 rock!");
/// assert_eq!(cleaned, "Tom & Jerry rock!");
/// ```
pub fn clean_text(raw: &str) -> String {
    let decoded = raw
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    let without_urls = URL_RE.replace_all(&decoded, " ");
    let letters_only = NON_TEXT_RE.replace_all(&without_urls, " ");
    WHITESPACE_RE
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

///Trims a location and collapses inner whitespace. Blank input yields `None`.
pub fn normalize_location(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WHITESPACE_RE.replace_all(trimmed, " ").into_owned())
}

///Extracts hashtags (`#` followed by word characters) from the lower-cased,
///cleaned form of a tweet body, in order of appearance.
pub fn extract_hashtags(raw: &str) -> Vec<String> {
    let base = clean_text(raw).to_lowercase();
    HASHTAG_RE
        .find_iter(&base)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_allowed(c: char) -> bool {
        let allowed = Regex::new(r"^[\p{L}\p{N}\p{P}\s]$").unwrap();
        allowed.is_match(&c.to_string())
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(clean_text("a &amp; b"), "a & b");
        // '<' and '>' are math symbols, so they are blanked after decoding
        assert_eq!(clean_text("x &lt;3 &gt; y"), "x 3 y");
    }

    #[test]
    fn strips_urls_and_emoji() {
        let raw = "Lockdown day 3 🏠 http://a.b/c?d=1 and https://t.co/XYZ #StayHome";
        let cleaned = clean_text(raw);
        assert_eq!(cleaned, "Lockdown day 3 and #StayHome");
        assert!(!cleaned.contains("http"));
    }

    #[test]
    fn output_only_contains_text_characters() {
        let samples = [
            "mixed ✨ symbols $ + = ^ | ~ and `ticks`",
            "tabs\tand\nnewlines\r\n",
            "日本語のツイート🎌です!",
            "",
            "   ",
            "https://only.a.url",
        ];
        for raw in samples {
            let cleaned = clean_text(raw);
            assert!(cleaned.chars().all(is_allowed), "{cleaned:?}");
            assert!(!cleaned.contains("  "));
            assert_eq!(cleaned, cleaned.trim());
            assert!(!URL_RE.is_match(&cleaned));
        }
        assert_eq!(clean_text("日本語のツイート🎌です!"), "日本語のツイート です!");
        assert_eq!(clean_text("https://only.a.url"), "");
    }

    #[test]
    fn location_normalization() {
        assert_eq!(normalize_location(None), None);
        assert_eq!(normalize_location(Some("   ")), None);
        assert_eq!(
            normalize_location(Some("  New   Delhi,\t India ")),
            Some("New Delhi, India".to_string())
        );
    }

    #[test]
    fn hashtags_are_lowercased_and_ordered() {
        let tags = extract_hashtags("Stay #Home &amp; #stay_SAFE, #COVID19! https://x.y/#nope");
        assert_eq!(tags, vec!["#home", "#stay_safe", "#covid19"]);
        assert!(extract_hashtags("no tags here # alone").is_empty());
    }
}
