use std::io;
use std::path::PathBuf;

use super::model::Sentiment;
use crate::cache::CacheError;

/// Represents the different types of errors that can occur while training or
/// building the sentiment classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The corpus directory does not exist or is not a directory
    #[error("Couldn't find corpus at {0}")]
    CorpusNotFound(String),
    /// The corpus exists but yielded no documents
    #[error("Corpus at {0} contains no documents")]
    EmptyCorpus(String),
    /// A corpus document could not be read as UTF-8 text
    #[error("Failed to read document {path:?}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A class has no training tokens, so its probability denominator is zero
    #[error("The {0} class has no training tokens; train or load a model before classifying")]
    EmptyClass(Sentiment),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred while loading or saving the cached model
    #[error(transparent)]
    Cache(#[from] CacheError),
}
