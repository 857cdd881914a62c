use naive_sentiment::{
    CacheError, Classifier, ClassifierError, CorpusLabels, DirectoryCorpus, Document,
    FrequencyModel, FrequencyStore, ModelCache, ModelSource, Sentiment, WordFrequencies,
};
use std::fs;

fn corpus() -> Vec<Document> {
    vec![
        Document::new("movies-5-a.txt", "great movie"),
        Document::new("movies-1-b.txt", "bad movie"),
    ]
}

#[test]
fn test_round_trip_through_store() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;

    let mut table = WordFrequencies::new();
    table.update(["don't", "stop", "stop", "e-mail", "x_y", "café"]);
    cache.save(&table, "pos")?;
    assert_eq!(cache.load("pos")?, table);
    Ok(())
}

#[test]
fn test_load_or_train_trains_then_reuses_cache() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;
    let labels = CorpusLabels::default();

    let (trained, source) = cache.load_or_train(&corpus(), &labels, false)?;
    assert_eq!(source, ModelSource::Trained);
    assert!(cache.is_cached());

    // The corpus is not consulted once the cache exists
    let empty: Vec<Document> = Vec::new();
    let (cached, source) = cache.load_or_train(&empty, &labels, false)?;
    assert_eq!(source, ModelSource::Cache);
    assert_eq!(cached, trained);

    let classifier = Classifier::new(cached)?;
    assert_eq!(classifier.classify("great"), Sentiment::Positive);
    Ok(())
}

#[test]
fn test_fresh_retrains_and_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;
    let labels = CorpusLabels::default();

    let stale = FrequencyModel::from_parts(
        [("stale", 1)].into_iter().collect(),
        [("old", 1)].into_iter().collect(),
    );
    cache.save_model(&stale)?;

    let (model, source) = cache.load_or_train(&corpus(), &labels, true)?;
    assert_eq!(source, ModelSource::Trained);
    assert_eq!(model.positive.get("great"), 1);
    assert_eq!(cache.load_model()?, model);
    Ok(())
}

#[test]
fn test_corrupt_cache_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;
    fs::write(cache.path_for("pos"), "{\"great\": \"many\"}")?;
    fs::write(cache.path_for("neg"), "{}")?;

    let result = cache.load_or_train(&corpus(), &CorpusLabels::default(), false);
    assert!(matches!(
        result,
        Err(ClassifierError::Cache(CacheError::PersistenceMismatch { .. }))
    ));
    Ok(())
}

#[test]
fn test_overflowing_cache_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;
    fs::write(cache.path_for("pos"), r#"{"a": 18446744073709551615, "b": 1}"#)?;
    fs::write(cache.path_for("neg"), r#"{"a": 1}"#)?;

    let result = cache.load_or_train(&corpus(), &CorpusLabels::default(), false);
    assert!(matches!(
        result,
        Err(ClassifierError::Cache(CacheError::PersistenceMismatch { .. }))
    ));
    Ok(())
}

#[test]
fn test_largest_cached_count_classifies() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path())?;
    fs::write(cache.path_for("pos"), r#"{"a": 18446744073709551615}"#)?;
    fs::write(cache.path_for("neg"), r#"{"a": 1}"#)?;

    let (model, source) = cache.load_or_train(&corpus(), &CorpusLabels::default(), false)?;
    assert_eq!(source, ModelSource::Cache);
    let classifier = Classifier::new(model)?;
    let scores = classifier.scores("a b");
    assert!(scores.positive.is_finite());
    assert!(scores.negative.is_finite());
    Ok(())
}

#[test]
fn test_missing_corpus_is_not_cached() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let cache = ModelCache::new(dir.path().join("cache"))?;
    let corpus = DirectoryCorpus::new(dir.path().join("movie_reviews"));

    let result = cache.load_or_train(&corpus, &CorpusLabels::default(), false);
    assert!(matches!(result, Err(ClassifierError::CorpusNotFound(_))));
    assert!(!cache.is_cached());
    Ok(())
}
