use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Reports whether a string is a recognized word in a given language
pub trait DictionaryChecker: Send + Sync {
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

/// Word-list backed dictionary for a single language
#[derive(Debug)]
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read dictionary {}", path.display()))?;
        let dictionary = Self::from_words(language, content.lines());

        tracing::info!(
            "Loaded {} words into {} dictionary",
            dictionary.len(),
            dictionary.language
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Create an empty dictionary
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for Dictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}
