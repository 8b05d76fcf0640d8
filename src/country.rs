use std::fmt;

/// Country a tweet is attributed to, derived from its source file name.
///
/// Variants are declared in alphabetical order of their labels, so the derived
/// `Ord` sorts countries the same way their labels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Australia,
    Brazil,
    India,
    Indonesia,
    Japan,
    Unknown,
}

// Lower-case file-name token for each known country, tested in this order.
const FILE_TOKENS: [(&str, Country); 5] = [
    ("australia", Country::Australia),
    ("brazil", Country::Brazil),
    ("india", Country::India),
    ("indonesia", Country::Indonesia),
    ("japan", Country::Japan),
];

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Australia => "Australia",
            Country::Brazil => "Brazil",
            Country::India => "India",
            Country::Indonesia => "Indonesia",
            Country::Japan => "Japan",
            Country::Unknown => "Unknown",
        }
    }

    /// Maps a file name to a country by case-insensitive substring match.
    /// The first matching token wins; no match yields `Unknown`.
    pub fn classify(file_name: &str) -> Country {
        let lower = file_name.to_lowercase();
        FILE_TOKENS
            .iter()
            .find(|(token, _)| lower.contains(token))
            .map(|(_, country)| *country)
            .unwrap_or(Country::Unknown)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
