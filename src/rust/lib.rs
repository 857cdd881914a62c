//! A word-frequency Naive Bayes sentiment classifier.
//!
//! Training counts how often each word appears in positive and negative
//! documents. Classification sums add-one smoothed log-probabilities of the
//! input's words under each class and picks the larger sum.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use naive_sentiment::{Classifier, Document, Sentiment};
//!
//! let corpus = vec![
//!     Document::new("movies-5-001.txt", "A great, moving film. Great cast!"),
//!     Document::new("movies-1-001.txt", "Dull plot and a terrible ending."),
//! ];
//!
//! let classifier = Classifier::builder().train(&corpus)?.build()?;
//!
//! assert_eq!(classifier.classify("What a great film"), Sentiment::Positive);
//! assert_eq!(classifier.classify("terrible and dull"), Sentiment::Negative);
//! # Ok(())
//! # }
//! ```
//!
//! # Caching
//!
//! Training from a directory and reusing the word counts on the next run:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use naive_sentiment::{Classifier, CorpusLabels, DirectoryCorpus, ModelCache};
//!
//! let cache = ModelCache::new_default()?;
//! let corpus = DirectoryCorpus::new("movie_reviews");
//! let (model, _source) = cache.load_or_train(&corpus, &CorpusLabels::default(), false)?;
//! let classifier = Classifier::new(model)?;
//! println!("{}", classifier.classify("I loved it"));
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod cache;
pub mod config;

pub use classifier::{
    tokenize, train, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo,
    CorpusSource, DirectoryCorpus, Document, FrequencyModel, InvalidFrequencies, LogScores,
    Sentiment, SharedClassifier, TrainingStats, WordFrequencies,
};
pub use cache::{CacheError, FrequencyStore, ModelCache, ModelSource};
pub use config::{CorpusLabels, NEGATIVE_FILE_PREFIX, POSITIVE_FILE_PREFIX};

pub fn init_logger() {
    env_logger::init();
}
