use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::error::ClassifierError;

/// A training document: the file name its label is derived from, and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Supplies labeled documents to the trainer.
pub trait CorpusSource {
    /// Returns every document in the corpus.
    fn documents(&self) -> Result<Vec<Document>, ClassifierError>;

    /// Human-readable location of the corpus, used in errors and logs.
    fn location(&self) -> String {
        "<in-memory corpus>".to_string()
    }
}

impl CorpusSource for [Document] {
    fn documents(&self) -> Result<Vec<Document>, ClassifierError> {
        Ok(self.to_vec())
    }
}

impl CorpusSource for Vec<Document> {
    fn documents(&self) -> Result<Vec<Document>, ClassifierError> {
        Ok(self.clone())
    }
}

/// The regular files directly inside a directory. Subdirectories are not
/// descended into.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl CorpusSource for DirectoryCorpus {
    /// Reads each file as UTF-8, ordered by file name.
    ///
    /// # Errors
    /// - `CorpusNotFound` if the directory is missing or not a directory
    /// - `DocumentRead` if a file cannot be read as UTF-8 text
    fn documents(&self) -> Result<Vec<Document>, ClassifierError> {
        if !self.root.is_dir() {
            return Err(ClassifierError::CorpusNotFound(self.location()));
        }

        let entries = fs::read_dir(&self.root).map_err(|source| ClassifierError::DocumentRead {
            path: self.root.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ClassifierError::DocumentRead {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            } else {
                debug!("Skipping non-file entry {:?}", path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path)
                .map_err(|source| ClassifierError::DocumentRead { path: path.clone(), source })?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            documents.push(Document { name, text });
        }

        info!("Read {} documents from {:?}", documents.len(), self.root);
        Ok(documents)
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
