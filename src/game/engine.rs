use std::sync::Arc;

use serde::Serialize;

use crate::{
    dictionary::DictionaryChecker,
    game::{EngineError, Round, Scorer, SubmitError, WordValidator},
    vocabulary::WordSource,
};

/// Root word used when the word source has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, dropped without feedback
    Ignored,
    Accepted { word: String, points: u32, score: u32 },
}

/// A title and message pair for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Owns the current round and applies the submission rules to it
pub struct GameEngine {
    word_source: Arc<dyn WordSource>,
    validator: WordValidator,
    round: Round,
}

impl GameEngine {
    /// Create an engine and draw its first round.
    /// Fails only if the word source cannot be reached.
    pub fn new(
        word_source: Arc<dyn WordSource>,
        dictionary: Arc<dyn DictionaryChecker>,
        language: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let round = Self::start_round(word_source.as_ref())?;
        Ok(Self {
            word_source,
            validator: WordValidator::new(dictionary, language),
            round,
        })
    }

    /// Draw a fresh round, falling back to the default root word
    /// when the source yields nothing or a blank word
    pub fn start_round(word_source: &dyn WordSource) -> Result<Round, EngineError> {
        let root_word = word_source
            .next_word()?
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string());

        tracing::debug!("Starting round with root word '{}'", root_word);

        Ok(Round::new(&root_word))
    }

    /// Replace the current round with a new one. Score and used words are lost.
    /// On failure the current round is kept.
    pub fn refresh(&mut self) -> Result<&Round, EngineError> {
        self.round = Self::start_round(self.word_source.as_ref())?;
        Ok(&self.round)
    }

    /// Validate a word against the current round and record it on success
    pub fn submit(&mut self, word: &str) -> Result<Submission, SubmitError> {
        let Some(answer) = self.validator.validate(word, &self.round)? else {
            return Ok(Submission::Ignored);
        };

        let points = Scorer::score(&answer);
        self.round.accept(answer.clone(), points);

        tracing::debug!(
            "Accepted '{}' for {} points (score {})",
            answer,
            points,
            self.round.score()
        );

        Ok(Submission::Accepted {
            word: answer,
            points,
            score: self.round.score(),
        })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn language(&self) -> &str {
        self.validator.language()
    }

    pub fn help() -> Notice {
        Notice {
            title: "How to play:".to_string(),
            message: concat!(
                "Make new words from the word in the top. Longer words get more points. ",
                "\n\n Press ↻ to get a new word"
            )
            .to_string(),
        }
    }
}
