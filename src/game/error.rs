use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocabulary::WordSourceError;

/// Reasons a submission is rejected. None of them change the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Words must be at least 3 characters")]
    TooShort,
    #[error("You can't use the same word as the root word.")]
    SameAsRoot,
    #[error("Be more original")]
    AlreadyUsed,
    #[error("You can't spell that word from '{root}'!")]
    NotComposable { root: String },
    #[error("You can't just make them up, you know!")]
    NotReal,
}

/// Machine-readable rejection kind sent to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    TooShort,
    SameAsRoot,
    AlreadyUsed,
    NotComposable,
    NotReal,
}

impl SubmitError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            SubmitError::TooShort => RejectionKind::TooShort,
            SubmitError::SameAsRoot => RejectionKind::SameAsRoot,
            SubmitError::AlreadyUsed => RejectionKind::AlreadyUsed,
            SubmitError::NotComposable { .. } => RejectionKind::NotComposable,
            SubmitError::NotReal => RejectionKind::NotReal,
        }
    }

    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            SubmitError::TooShort => "Word too short",
            SubmitError::SameAsRoot => "Word is same as root",
            SubmitError::AlreadyUsed => "Word used already",
            SubmitError::NotComposable { .. } => "Word not possible",
            SubmitError::NotReal => "Word not recognized",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    WordSourceUnavailable(#[from] WordSourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_and_messages() {
        let err = SubmitError::NotComposable {
            root: "silkworm".to_string(),
        };
        assert_eq!(err.title(), "Word not possible");
        assert_eq!(err.message(), "You can't spell that word from 'silkworm'!");
        assert_eq!(err.kind(), RejectionKind::NotComposable);

        assert_eq!(SubmitError::TooShort.title(), "Word too short");
        assert_eq!(
            SubmitError::TooShort.message(),
            "Words must be at least 3 characters"
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SubmitError::SameAsRoot.kind()).unwrap();
        assert_eq!(json, "\"same_as_root\"");
    }
}
