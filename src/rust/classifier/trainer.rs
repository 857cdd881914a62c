use log::{debug, info};

use super::corpus::CorpusSource;
use super::error::ClassifierError;
use super::model::{FrequencyModel, Sentiment};
use super::tokenizer::tokenize;
use crate::config::CorpusLabels;

/// Counts gathered during one training pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingStats {
    pub documents: usize,
    pub positive_documents: usize,
    pub negative_documents: usize,
    /// Documents whose name matched neither label prefix
    pub skipped_documents: usize,
    pub positive_tokens: usize,
    pub negative_tokens: usize,
}

impl TrainingStats {
    fn record(&mut self, sentiment: Sentiment, tokens: usize) {
        match sentiment {
            Sentiment::Positive => {
                self.positive_documents += 1;
                self.positive_tokens += tokens;
            }
            Sentiment::Negative => {
                self.negative_documents += 1;
                self.negative_tokens += tokens;
            }
        }
    }
}

/// Tokenizes every document in `corpus` and adds its tokens to the table of
/// the class its file name selects.
///
/// Documents matching neither prefix in `labels` are tokenized and then
/// ignored. Counts are added to whatever `model` already holds.
///
/// # Errors
/// - `EmptyCorpus` if the corpus yields no documents
/// - any error the corpus source reports while reading
pub fn train<C>(
    model: &mut FrequencyModel,
    corpus: &C,
    labels: &CorpusLabels,
) -> Result<TrainingStats, ClassifierError>
where
    C: CorpusSource + ?Sized,
{
    let documents = corpus.documents()?;
    if documents.is_empty() {
        return Err(ClassifierError::EmptyCorpus(corpus.location()));
    }

    info!("Training on {} documents from {}", documents.len(), corpus.location());
    let mut stats = TrainingStats::default();

    for document in &documents {
        stats.documents += 1;
        let tokens = tokenize(&document.text);

        match labels.label_for(&document.name) {
            Some(sentiment) => {
                stats.record(sentiment, tokens.len());
                model.frequencies_mut(sentiment).update(&tokens);
            }
            None => {
                debug!("Skipping unlabeled document '{}'", document.name);
                stats.skipped_documents += 1;
            }
        }
    }

    info!(
        "Training complete: {} positive / {} negative documents, {} skipped",
        stats.positive_documents, stats.negative_documents, stats.skipped_documents
    );
    info!(
        "Vocabulary: {} positive words ({} tokens), {} negative words ({} tokens)",
        model.positive.len(),
        stats.positive_tokens,
        model.negative.len(),
        stats.negative_tokens
    );
    Ok(stats)
}
