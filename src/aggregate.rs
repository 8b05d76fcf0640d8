use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

use crate::country::Country;
use crate::record::TweetRecord;
use crate::text::extract_hashtags;

// Free-text month labels such as "Mar 25" or "Apr 01".
static MONTH_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3} [0-9]{2}$").expect("valid month label regex"));

///Counts how often each item occurs. Returns HashMap<item, quantity>.
/// # Example
/// ```
/// use tweet_analysis::count_items;
/// let counted = count_items(["b", "a", "b"]);
/// assert_eq!(counted["b"], 2);
/// assert_eq!(counted["a"], 1);
/// ```
pub fn count_items<K, I>(items: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut frequency: HashMap<K, usize> = HashMap::new();
    for item in items {
        *frequency.entry(item).or_insert(0) += 1;
    }
    frequency
}

///Sorts a frequency map into a Vec, by count descending and then by key ascending.
/// # Example
/// ```
/// use tweet_analysis::sort_map_to_vec;
/// use std::collections::HashMap;
/// let mut words_map = HashMap::new();
/// words_map.insert("one".to_string(), 1);
/// words_map.insert("two".to_string(), 2);
/// words_map.insert("deux".to_string(), 2);
/// let vec_sorted = sort_map_to_vec(words_map);
/// let expected = vec![("deux".to_string(), 2), ("two".to_string(), 2), ("one".to_string(), 1)];
/// assert_eq!(vec_sorted, expected);
/// ```
pub fn sort_map_to_vec<K: Ord>(frequency: HashMap<K, usize>) -> Vec<(K, usize)> {
    let mut vec_sorted: Vec<(K, usize)> = frequency.into_iter().collect();
    vec_sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    vec_sorted
}

/// Running sum and sample count of sentiment scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentStat {
    pub sum: f64,
    pub count: usize,
}

impl SentimentStat {
    pub fn add(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
    }

    /// Mean score, or `None` when no sample was added.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Average India sentiment for one month label.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSentiment {
    pub month_label: String,
    pub average: f64,
    pub count: usize,
}

/// Everything the reports and the console summary are built from.
#[derive(Debug, Default)]
pub struct Aggregates {
    pub by_country: HashMap<Country, usize>,
    pub by_month: HashMap<String, usize>,
    pub by_country_month: BTreeMap<Country, HashMap<String, usize>>,
    pub hashtags_by_country: BTreeMap<Country, HashMap<String, usize>>,
    pub sentiment_by_country: BTreeMap<Country, SentimentStat>,
    /// Only labels shaped like `Mar 25`, sorted by label.
    pub india_sentiment_by_month: Vec<MonthSentiment>,
}

impl Aggregates {
    pub fn from_records(records: &[TweetRecord]) -> Aggregates {
        let mut agg = Aggregates {
            by_country: count_items(records.iter().map(|r| r.country)),
            ..Aggregates::default()
        };
        let mut india_by_month: BTreeMap<String, SentimentStat> = BTreeMap::new();

        for record in records {
            let month = record.month_key();
            *agg.by_month.entry(month.clone()).or_insert(0) += 1;
            *agg.by_country_month
                .entry(record.country)
                .or_default()
                .entry(month.clone())
                .or_insert(0) += 1;

            let tags = extract_hashtags(&record.text);
            if !tags.is_empty() {
                let counts = agg.hashtags_by_country.entry(record.country).or_default();
                for tag in tags {
                    *counts.entry(tag).or_insert(0) += 1;
                }
            }

            if let Some(score) = record.sentiment_score {
                agg.sentiment_by_country
                    .entry(record.country)
                    .or_default()
                    .add(score);
                if record.country == Country::India {
                    india_by_month.entry(month).or_default().add(score);
                }
            }
        }

        agg.india_sentiment_by_month = india_by_month
            .into_iter()
            .filter(|(label, _)| MONTH_LABEL_RE.is_match(label))
            .filter_map(|(month_label, stat)| {
                stat.average().map(|average| MonthSentiment {
                    month_label,
                    average,
                    count: stat.count,
                })
            })
            .collect();
        agg
    }

    pub fn sorted_countries(&self) -> Vec<(Country, usize)> {
        sort_map_to_vec(self.by_country.clone())
    }

    pub fn sorted_months(&self) -> Vec<(String, usize)> {
        sort_map_to_vec(self.by_month.clone())
    }

    /// Per country (alphabetical), months in ascending order with their counts.
    pub fn country_month_rows(&self) -> Vec<(Country, String, usize)> {
        let mut rows = Vec::new();
        for (country, months) in &self.by_country_month {
            let mut months: Vec<(&String, &usize)> = months.iter().collect();
            months.sort_by(|a, b| a.0.cmp(b.0));
            rows.extend(months.into_iter().map(|(m, c)| (*country, m.clone(), *c)));
        }
        rows
    }

    /// At most `n` hashtags per country (alphabetical), most frequent first.
    pub fn top_hashtags(&self, n: usize) -> Vec<(Country, Vec<(String, usize)>)> {
        self.hashtags_by_country
            .iter()
            .map(|(country, counts)| {
                let mut top = sort_map_to_vec(counts.clone());
                top.truncate(n);
                (*country, top)
            })
            .collect()
    }
}
