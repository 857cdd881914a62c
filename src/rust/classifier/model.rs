use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// The two classes the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected contents for a [`WordFrequencies`] table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFrequencies {
    #[error("word {0:?} has a count of zero")]
    ZeroCount(String),
    #[error("table contains an empty word")]
    EmptyWord,
    #[error("word counts add up to more than {}", u64::MAX)]
    TotalOverflow,
}

/// Word counts observed for one class during training.
///
/// Every stored count is at least 1: counts only ever grow, and a word is
/// inserted on its first occurrence. Deserialization enforces the same rule,
/// so a cached table with a zero count, an empty word, or counts whose sum does
/// not fit in a `u64` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, u64>")]
pub struct WordFrequencies {
    counts: HashMap<String, u64>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every occurrence in `tokens`, adding to any existing counts.
    ///
    /// # Example
    /// ```
    /// use naive_sentiment::WordFrequencies;
    ///
    /// let mut freqs: WordFrequencies = [("a", 2), ("b", 2)].into_iter().collect();
    /// freqs.update(["a", "a", "b", "b", "b", "a", "a"]);
    /// assert_eq!(freqs.get("a"), 6);
    /// assert_eq!(freqs.get("b"), 5);
    /// ```
    pub fn update<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count = count.saturating_add(1),
                None => {
                    self.counts.insert(token.to_owned(), 1);
                }
            }
        }
    }

    /// Count for `word`, or 0 when it was never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all counts: the number of training tokens for the class.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn add(&mut self, word: String, count: u64) {
        if count > 0 {
            let entry = self.counts.entry(word).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }
}

impl Serialize for WordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.counts.serialize(serializer)
    }
}

impl TryFrom<HashMap<String, u64>> for WordFrequencies {
    type Error = InvalidFrequencies;

    fn try_from(counts: HashMap<String, u64>) -> Result<Self, Self::Error> {
        if let Some((word, _)) = counts.iter().find(|(_, &count)| count == 0) {
            return Err(InvalidFrequencies::ZeroCount(word.clone()));
        }
        if counts.contains_key("") {
            return Err(InvalidFrequencies::EmptyWord);
        }
        counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
            .ok_or(InvalidFrequencies::TotalOverflow)?;
        Ok(Self { counts })
    }
}

/// Builds a table from `(word, count)` pairs. Counts for repeated words add up
/// and zero counts are dropped.
impl<S: Into<String>> FromIterator<(S, u64)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut freqs = Self::new();
        for (word, count) in iter {
            freqs.add(word.into(), count);
        }
        freqs
    }
}

/// The complete learned state: one word-count table per class.
///
/// A freshly created model is empty. It is filled once, either by training or
/// by restoring both tables from a cache, and is then handed to a
/// [`Classifier`](super::Classifier), which never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel {
    pub positive: WordFrequencies,
    pub negative: WordFrequencies,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(positive: WordFrequencies, negative: WordFrequencies) -> Self {
        Self { positive, negative }
    }

    pub fn frequencies(&self, sentiment: Sentiment) -> &WordFrequencies {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
        }
    }

    pub fn frequencies_mut(&mut self, sentiment: Sentiment) -> &mut WordFrequencies {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
        }
    }

    /// Returns the first class whose table is empty, if any.
    pub fn empty_class(&self) -> Option<Sentiment> {
        [Sentiment::Positive, Sentiment::Negative]
            .into_iter()
            .find(|&sentiment| self.frequencies(sentiment).is_empty())
    }
}
