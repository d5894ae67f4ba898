use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use thiserror::Error;
use tokio::fs;

/// The vocabulary could not be reached at all (as opposed to being empty)
#[derive(Debug, Error)]
#[error("word source unavailable: {0}")]
pub struct WordSourceError(pub String);

/// Supplies candidate root words
pub trait WordSource: Send + Sync {
    /// Draw a random word. `Ok(None)` means the vocabulary is empty.
    fn next_word(&self) -> Result<Option<String>, WordSourceError>;
}

/// Vocabulary loaded from a bundled word list, one word per line
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file. Fails if the file cannot be read;
    /// an empty file produces an empty list.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not load word list {}", path.display()))?;
        let list = Self::from_words(content.lines());

        if list.is_empty() {
            tracing::warn!("Word list {} is empty", path.display());
        } else {
            tracing::info!("Loaded {} root words from {}", list.len(), path.display());
        }

        Ok(list)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn next_word(&self) -> Result<Option<String>, WordSourceError> {
        Ok(self.words.choose(&mut rand::rng()).cloned())
    }
}
