use std::env;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::classifier::{
    ClassifierBuilder, ClassifierError, CorpusSource, FrequencyModel, WordFrequencies,
};
use crate::config::CorpusLabels;

/// Cache key of the positive word counts
pub const POSITIVE_KEY: &str = "pos";

/// Cache key of the negative word counts
pub const NEGATIVE_KEY: &str = "neg";

const CACHE_EXTENSION: &str = "dat";

/// Environment variable overriding the default cache directory
pub const CACHE_DIR_ENV: &str = "NAIVE_SENTIMENT_CACHE";

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("No cached word counts at {0:?}")]
    NotCached(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Cached word counts at {path:?} are not a valid frequency table: {source}")]
    PersistenceMismatch {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize word counts for {path:?}: {source}")]
    SerializationError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Saves and restores one word-count table under a key.
///
/// Whatever the storage, `load(key)` after `save(table, key)` returns a table
/// equal to `table`.
pub trait FrequencyStore {
    fn save(&self, frequencies: &WordFrequencies, key: &str) -> Result<(), CacheError>;
    fn load(&self, key: &str) -> Result<WordFrequencies, CacheError>;
}

/// Where a model handed out by [`ModelCache::load_or_train`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    Cache,
    Trained,
}

/// Stores trained word counts as JSON files in a directory, one file per class.
#[derive(Debug, Clone)]
pub struct ModelCache {
    cache_dir: PathBuf,
}

impl ModelCache {
    /// Creates a new ModelCache in the default cache directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::default_cache_dir())
    }

    /// Returns the default cache directory path
    pub fn default_cache_dir() -> PathBuf {
        Self::cache_dir_from(env::var_os(CACHE_DIR_ENV))
    }

    /// Resolves the cache directory given the value of [`CACHE_DIR_ENV`].
    fn cache_dir_from(env_value: Option<OsString>) -> PathBuf {
        // 1. Explicit override
        if let Some(path) = env_value.filter(|path| !path.is_empty()) {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("naive-sentiment");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("naive-sentiment");
        }

        // 4. If all else fails, use system temp directory
        env::temp_dir().join("naive-sentiment")
    }

    pub fn new<P: AsRef<Path>>(cache_dir: P) -> io::Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.{}", key, CACHE_EXTENSION))
    }

    /// True when both class tables are present
    pub fn is_cached(&self) -> bool {
        let positive_path = self.path_for(POSITIVE_KEY);
        let negative_path = self.path_for(NEGATIVE_KEY);
        log::debug!("Checking for cached model:");
        log::debug!("  Positive counts: {:?} (exists: {})", positive_path, positive_path.is_file());
        log::debug!("  Negative counts: {:?} (exists: {})", negative_path, negative_path.is_file());
        positive_path.is_file() && negative_path.is_file()
    }

    pub fn save_model(&self, model: &FrequencyModel) -> Result<(), CacheError> {
        self.save(&model.positive, POSITIVE_KEY)?;
        self.save(&model.negative, NEGATIVE_KEY)?;
        Ok(())
    }

    pub fn load_model(&self) -> Result<FrequencyModel, CacheError> {
        let positive = self.load(POSITIVE_KEY)?;
        let negative = self.load(NEGATIVE_KEY)?;
        Ok(FrequencyModel::from_parts(positive, negative))
    }

    pub fn remove_cache(&self) -> Result<(), CacheError> {
        for key in [POSITIVE_KEY, NEGATIVE_KEY] {
            let path = self.path_for(key);
            if path.exists() {
                log::info!("Removing cached word counts at {:?}", path);
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    /// Returns the cached model, or trains one from `corpus` and caches it.
    ///
    /// With `fresh` set the cache is ignored and overwritten. A cache that
    /// exists but cannot be read is an error rather than a reason to retrain.
    pub fn load_or_train<C>(
        &self,
        corpus: &C,
        labels: &CorpusLabels,
        fresh: bool,
    ) -> Result<(FrequencyModel, ModelSource), ClassifierError>
    where
        C: CorpusSource + ?Sized,
    {
        if !fresh && self.is_cached() {
            log::info!("Cached word counts found in {:?}, loading...", self.cache_dir);
            let model = self.load_model()?;
            return Ok((model, ModelSource::Cache));
        }

        if fresh {
            log::info!("Fresh training requested - ignoring any cached word counts");
        } else {
            log::info!("No cached word counts in {:?} - running training...", self.cache_dir);
        }

        let model = ClassifierBuilder::new()
            .with_labels(labels.clone())
            .train(corpus)?
            .into_model()
            .ok_or_else(|| ClassifierError::BuildError("Training produced no model".to_string()))?;
        self.save_model(&model)?;
        Ok((model, ModelSource::Trained))
    }
}

impl FrequencyStore for ModelCache {
    fn save(&self, frequencies: &WordFrequencies, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        log::info!("Saving {} word counts to {:?}", frequencies.len(), path);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, frequencies).map_err(|source| {
            CacheError::SerializationError {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush()?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<WordFrequencies, CacheError> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Err(CacheError::NotCached(path));
        }

        log::info!("Loading word counts from {:?}", path);
        let reader = BufReader::new(File::open(&path)?);
        let frequencies: WordFrequencies = serde_json::from_reader(reader)
            .map_err(|source| CacheError::PersistenceMismatch { path: path.clone(), source })?;
        log::debug!("Loaded {} words from {:?}", frequencies.len(), path);
        Ok(frequencies)
    }
}
