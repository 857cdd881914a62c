use log::info;

use super::classifier::Classifier;
use super::corpus::CorpusSource;
use super::error::ClassifierError;
use super::model::FrequencyModel;
use super::trainer::{self, TrainingStats};
use crate::config::CorpusLabels;

/// A builder for constructing a Classifier with a fluent interface.
///
/// The model comes from exactly one place: a training pass over a corpus, or a
/// previously trained model handed in with [`with_model`](Self::with_model).
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    labels: CorpusLabels,
    model: Option<FrequencyModel>,
    stats: Option<TrainingStats>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with the default label prefixes
    ///
    /// # Example
    /// ```
    /// use naive_sentiment::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file name prefixes that decide which class a document trains
    ///
    /// # Example
    /// ```
    /// use naive_sentiment::{ClassifierBuilder, CorpusLabels};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_labels(CorpusLabels::new("pos-", "neg-"));
    /// ```
    pub fn with_labels(mut self, labels: CorpusLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Uses an already trained model, for example one restored from a cache
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance, or a `BuildError`
    ///   if a model was already trained or set
    pub fn with_model(mut self, model: FrequencyModel) -> Result<Self, ClassifierError> {
        if self.model.is_some() {
            return Err(ClassifierError::BuildError("Model already set".to_string()));
        }
        self.model = Some(model);
        Ok(self)
    }

    /// Trains a fresh model on every document in `corpus`
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - A model was already trained or set
    ///   - The corpus is missing or empty
    ///   - A document could not be read
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use naive_sentiment::{Classifier, Document, Sentiment};
    ///
    /// let corpus = vec![
    ///     Document::new("movies-5-a.txt", "great movie"),
    ///     Document::new("movies-1-b.txt", "bad movie"),
    /// ];
    /// let classifier = Classifier::builder().train(&corpus)?.build()?;
    /// assert_eq!(classifier.classify("great"), Sentiment::Positive);
    /// # Ok(())
    /// # }
    /// ```
    pub fn train<C>(mut self, corpus: &C) -> Result<Self, ClassifierError>
    where
        C: CorpusSource + ?Sized,
    {
        if self.model.is_some() {
            return Err(ClassifierError::BuildError("Model already set".to_string()));
        }
        let mut model = FrequencyModel::new();
        let stats = trainer::train(&mut model, corpus, &self.labels)?;
        self.model = Some(model);
        self.stats = Some(stats);
        Ok(self)
    }

    /// Statistics from the training pass, if the model was trained here
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.stats.as_ref()
    }

    /// Hands back the model without building a classifier
    pub fn into_model(self) -> Option<FrequencyModel> {
        self.model
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - No model was trained or set
    ///   - Either class has no training tokens
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        let model = self
            .model
            .ok_or_else(|| ClassifierError::BuildError("No model trained or loaded".to_string()))?;
        let classifier = Classifier::new(model)?;
        let info = classifier.info();
        info!(
            "Classifier ready: {} positive / {} negative words",
            info.positive_vocabulary, info.negative_vocabulary
        );
        Ok(classifier)
    }
}
