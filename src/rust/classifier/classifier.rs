use std::sync::{Arc, PoisonError, RwLock};

use log::trace;

use super::error::ClassifierError;
use super::model::{FrequencyModel, Sentiment, WordFrequencies};
use super::tokenizer::tokenize;

/// Log-likelihood of a text under each class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScores {
    pub positive: f64,
    pub negative: f64,
}

impl LogScores {
    /// The higher-scoring class. Exact ties go to negative.
    pub fn sentiment(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

/// A Naive Bayes sentiment classifier over a trained [`FrequencyModel`].
///
/// A `Classifier` only exists for a model where both classes have at least one
/// training token; [`Classifier::new`] refuses anything else, because every
/// probability is divided by the class total. Once built it is read-only.
///
/// # Thread Safety
///
/// The model lives behind an `Arc`, so cloning a classifier is cheap and clones
/// can be moved to other threads. To retrain while other threads classify, build
/// a new classifier and swap it in through [`SharedClassifier`].
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use naive_sentiment::{Classifier, FrequencyModel, Sentiment};
///
/// let model = FrequencyModel::from_parts(
///     [("great", 3), ("movie", 1)].into_iter().collect(),
///     [("bad", 3), ("movie", 1)].into_iter().collect(),
/// );
/// let classifier = Classifier::new(model)?;
/// assert_eq!(classifier.classify("a great movie"), Sentiment::Positive);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    model: Arc<FrequencyModel>,
    positive_total: u64,
    negative_total: u64,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
        assert_send_sync::<SharedClassifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Wraps a trained model.
    ///
    /// # Errors
    /// `EmptyClass` if either class has no training tokens.
    pub fn new(model: FrequencyModel) -> Result<Self, ClassifierError> {
        if let Some(sentiment) = model.empty_class() {
            return Err(ClassifierError::EmptyClass(sentiment));
        }
        let positive_total = model.positive.total();
        let negative_total = model.negative.total();
        Ok(Self {
            model: Arc::new(model),
            positive_total,
            negative_total,
        })
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            positive_vocabulary: self.model.positive.len(),
            negative_vocabulary: self.model.negative.len(),
            positive_tokens: self.positive_total,
            negative_tokens: self.negative_total,
        }
    }

    /// Classifies `text` as positive or negative.
    ///
    /// Text with no tokens scores zero for both classes and is negative.
    pub fn classify(&self, text: &str) -> Sentiment {
        self.scores(text).sentiment()
    }

    /// Classifies `text` and returns the log-likelihoods behind the decision.
    pub fn predict(&self, text: &str) -> (Sentiment, LogScores) {
        let scores = self.scores(text);
        (scores.sentiment(), scores)
    }

    /// Sums `ln((count + 1) / total)` over the tokens of `text`, per class.
    ///
    /// Add-one smoothing keeps every term finite for words the class never saw.
    pub fn scores(&self, text: &str) -> LogScores {
        let mut scores = LogScores {
            positive: 0.0,
            negative: 0.0,
        };

        for token in tokenize(text) {
            let positive = Self::log_probability(&self.model.positive, self.positive_total, &token);
            let negative = Self::log_probability(&self.model.negative, self.negative_total, &token);
            trace!("'{}': pos {:.4}, neg {:.4}", token, positive, negative);
            scores.positive += positive;
            scores.negative += negative;
        }
        scores
    }

    /// Smoothed `(P(word | positive), P(word | negative))`.
    ///
    /// The word is lowercased first, the same way the tokenizer folds case.
    pub fn probability_lookup(&self, word: &str) -> (f64, f64) {
        let word = word.to_lowercase();
        (
            Self::probability(&self.model.positive, self.positive_total, &word),
            Self::probability(&self.model.negative, self.negative_total, &word),
        )
    }

    fn probability(freqs: &WordFrequencies, total: u64, word: &str) -> f64 {
        (freqs.get(word) as f64 + 1.0) / total as f64
    }

    fn log_probability(freqs: &WordFrequencies, total: u64, word: &str) -> f64 {
        Self::probability(freqs, total, word).ln()
    }
}

/// A classifier handle that many threads can read while another replaces the
/// model underneath them.
///
/// Readers take a snapshot with [`current`](Self::current) and keep using it
/// even if a new model is installed meanwhile.
#[derive(Debug)]
pub struct SharedClassifier {
    inner: RwLock<Arc<Classifier>>,
}

impl SharedClassifier {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            inner: RwLock::new(Arc::new(classifier)),
        }
    }

    pub fn current(&self) -> Arc<Classifier> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `classifier` and returns the one it replaced.
    pub fn replace(&self, classifier: Classifier) -> Arc<Classifier> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(classifier))
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        self.current().classify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn classifier(pos: &[(&str, u64)], neg: &[(&str, u64)]) -> Classifier {
        let model = FrequencyModel::from_parts(
            pos.iter().map(|&(w, c)| (w, c)).collect(),
            neg.iter().map(|&(w, c)| (w, c)).collect(),
        );
        Classifier::new(model).unwrap()
    }

    fn ab_classifier() -> Classifier {
        classifier(&[("a", 2), ("b", 1)], &[("a", 1), ("b", 2)])
    }

    #[test]
    fn test_classify_follows_relative_frequency() {
        let classifier = ab_classifier();
        assert_eq!(classifier.classify("a a"), Sentiment::Positive);
        assert_eq!(classifier.classify("b b"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_weighs_smoothed_log_likelihood() {
        // a costs negative 3 x ln(2/3), b costs positive 4 x ln(2/3)
        let classifier = ab_classifier();
        assert_eq!(classifier.classify("a a a b b b b"), Sentiment::Negative);
    }

    #[test]
    fn test_scores_match_formula() {
        let classifier = ab_classifier();
        let scores = classifier.scores("a b");
        let expected_pos = (3.0f64 / 3.0).ln() + (2.0f64 / 3.0).ln();
        let expected_neg = (2.0f64 / 3.0).ln() + (3.0f64 / 3.0).ln();
        assert!((scores.positive - expected_pos).abs() < 1e-12);
        assert!((scores.negative - expected_neg).abs() < 1e-12);
        // Equal scores resolve to negative
        assert_eq!(scores.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_empty_text_is_negative() {
        let classifier = classifier(&[("a", 5)], &[("b", 5)]);
        let (sentiment, scores) = classifier.predict("");
        assert_eq!(sentiment, Sentiment::Negative);
        assert_eq!(scores, LogScores { positive: 0.0, negative: 0.0 });
        assert_eq!(classifier.classify("?!..."), Sentiment::Negative);
    }

    #[test]
    fn test_unknown_words_are_finite() {
        let classifier = classifier(&[("good", 10)], &[("bad", 10)]);
        let scores = classifier.scores("unknown");
        assert!(scores.positive.is_finite());
        assert!(scores.negative.is_finite());
        assert_eq!(classifier.classify("unknown"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let classifier = classifier(&[("great", 4)], &[("awful", 4)]);
        assert_eq!(classifier.classify("GREAT!"), Sentiment::Positive);
        assert_eq!(classifier.classify("Awful."), Sentiment::Negative);
    }

    #[test]
    fn test_probability_lookup() {
        let classifier = ab_classifier();
        let (pos, neg) = classifier.probability_lookup("A");
        assert!((pos - 1.0).abs() < 1e-12);
        assert!((neg - 2.0 / 3.0).abs() < 1e-12);

        let (pos, neg) = classifier.probability_lookup("unseen");
        assert!((pos - 1.0 / 3.0).abs() < 1e-12);
        assert!((neg - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_saturated_counts_do_not_panic() {
        let classifier = classifier(&[("a", u64::MAX), ("b", 1)], &[("a", 1)]);
        assert_eq!(classifier.info().positive_tokens, u64::MAX);

        let (pos, neg) = classifier.probability_lookup("a");
        assert!(pos.is_finite() && pos > 0.0);
        assert!((neg - 2.0).abs() < 1e-12);

        let scores = classifier.scores("a b unseen");
        assert!(scores.positive.is_finite());
        assert!(scores.negative.is_finite());
    }

    #[test]
    fn test_empty_class_is_rejected() {
        let model = FrequencyModel::from_parts(
            [("a", 1)].into_iter().collect(),
            WordFrequencies::new(),
        );
        assert!(matches!(
            Classifier::new(model),
            Err(ClassifierError::EmptyClass(Sentiment::Negative))
        ));
        assert!(matches!(
            Classifier::new(FrequencyModel::new()),
            Err(ClassifierError::EmptyClass(Sentiment::Positive))
        ));
    }

    #[test]
    fn test_info() {
        let info = ab_classifier().info();
        assert_eq!(info.positive_vocabulary, 2);
        assert_eq!(info.negative_vocabulary, 2);
        assert_eq!(info.positive_tokens, 3);
        assert_eq!(info.negative_tokens, 3);
    }

    #[test]
    fn test_shared_classifier_swaps_whole_model() {
        let shared = Arc::new(SharedClassifier::new(classifier(&[("x", 5)], &[("y", 5)])));
        let snapshot = shared.current();
        assert_eq!(shared.classify("x"), Sentiment::Positive);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let _ = shared.classify("x y x");
                    }
                })
            })
            .collect();

        let previous = shared.replace(classifier(&[("y", 5)], &[("x", 5)]));
        for reader in readers {
            reader.join().unwrap();
        }

        assert!(Arc::ptr_eq(&previous, &snapshot));
        assert_eq!(snapshot.classify("x"), Sentiment::Positive);
        assert_eq!(shared.classify("x"), Sentiment::Negative);
    }
}
