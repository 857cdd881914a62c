mod error;
mod tokenizer;
mod model;
mod corpus;
mod trainer;
mod classifier;
pub mod builder;

pub use error::ClassifierError;
pub use tokenizer::tokenize;
pub use model::{FrequencyModel, InvalidFrequencies, Sentiment, WordFrequencies};
pub use corpus::{CorpusSource, DirectoryCorpus, Document};
pub use trainer::{train, TrainingStats};
pub use classifier::{Classifier, LogScores, SharedClassifier};
pub use builder::ClassifierBuilder;

/// Information about the current state of a classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierInfo {
    /// Distinct words seen in positive documents
    pub positive_vocabulary: usize,
    /// Distinct words seen in negative documents
    pub negative_vocabulary: usize,
    /// Total tokens counted for the positive class
    pub positive_tokens: u64,
    /// Total tokens counted for the negative class
    pub negative_tokens: u64,
}
