use std::sync::Arc;

use crate::{dictionary::DictionaryChecker, game::{Round, SubmitError}, utils::LetterBag};

/// Shortest word accepted, in characters
pub const MIN_WORD_LENGTH: usize = 3;

pub struct WordValidator {
    dictionary: Arc<dyn DictionaryChecker>,
    language: String,
}

impl WordValidator {
    pub fn new(dictionary: Arc<dyn DictionaryChecker>, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// Lowercase and trim surrounding whitespace, newlines included
    pub fn normalize(word: &str) -> String {
        word.trim().to_lowercase()
    }

    /// Run the submission checks in order and stop at the first failure.
    ///
    /// Returns `Ok(None)` for blank input, which is dropped without feedback,
    /// and `Ok(Some(word))` with the normalized word when every check passes.
    pub fn validate(&self, word: &str, round: &Round) -> Result<Option<String>, SubmitError> {
        let answer = Self::normalize(word);
        if answer.is_empty() {
            return Ok(None);
        }

        if answer.chars().count() < MIN_WORD_LENGTH {
            return Err(SubmitError::TooShort);
        }

        if answer == round.root_word() {
            return Err(SubmitError::SameAsRoot);
        }

        if !Self::is_original(&answer, round) {
            return Err(SubmitError::AlreadyUsed);
        }

        if !Self::is_possible(&answer, round.root_word()) {
            return Err(SubmitError::NotComposable {
                root: round.root_word().to_string(),
            });
        }

        if !self.is_real(&answer) {
            return Err(SubmitError::NotReal);
        }

        Ok(Some(answer))
    }

    pub fn is_original(word: &str, round: &Round) -> bool {
        !round.is_used(word)
    }

    /// Check that the word's letters form a sub-multiset of the root's letters
    pub fn is_possible(word: &str, root: &str) -> bool {
        LetterBag::from(root).contains_word(word)
    }

    pub fn is_real(&self, word: &str) -> bool {
        self.dictionary.is_valid(word, &self.language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}
