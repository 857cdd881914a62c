use crate::classifier::Sentiment;

/// File name prefix for positive training documents
pub const POSITIVE_FILE_PREFIX: &str = "movies-5";

/// File name prefix for negative training documents
pub const NEGATIVE_FILE_PREFIX: &str = "movies-1";

/// Maps a training file name to its class by prefix.
///
/// Matching is an exact, case-sensitive prefix test. The positive prefix is
/// checked first; files matching neither prefix carry no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLabels {
    pub positive_prefix: String,
    pub negative_prefix: String,
}

impl Default for CorpusLabels {
    fn default() -> Self {
        Self {
            positive_prefix: POSITIVE_FILE_PREFIX.to_string(),
            negative_prefix: NEGATIVE_FILE_PREFIX.to_string(),
        }
    }
}

impl CorpusLabels {
    pub fn new(positive_prefix: impl Into<String>, negative_prefix: impl Into<String>) -> Self {
        Self {
            positive_prefix: positive_prefix.into(),
            negative_prefix: negative_prefix.into(),
        }
    }

    pub fn label_for(&self, file_name: &str) -> Option<Sentiment> {
        if file_name.starts_with(&self.positive_prefix) {
            Some(Sentiment::Positive)
        } else if file_name.starts_with(&self.negative_prefix) {
            Some(Sentiment::Negative)
        } else {
            None
        }
    }
}
