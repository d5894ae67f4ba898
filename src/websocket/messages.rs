use serde::{Deserialize, Serialize};

use crate::game::{Notice, RejectionKind, Round, SubmitError};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    GetState,
    Refresh,
    SubmitWord {
        word: String,
    },
    Help,
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoundState {
        root_word: String,
        used_words: Vec<String>,
        score: u32,
    },
    WordAccepted {
        word: String,
        points: u32,
        score: u32,
        used_words: Vec<String>,
    },
    InvalidWord {
        kind: RejectionKind,
        title: String,
        message: String,
    },
    Help {
        title: String,
        message: String,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn round_state(round: &Round) -> Self {
        let snapshot = round.snapshot();
        ServerMessage::RoundState {
            root_word: snapshot.root_word,
            used_words: snapshot.used_words,
            score: snapshot.score,
        }
    }

    pub fn invalid_word(err: &SubmitError) -> Self {
        ServerMessage::InvalidWord {
            kind: err.kind(),
            title: err.title().to_string(),
            message: err.message(),
        }
    }
}

impl From<Notice> for ServerMessage {
    fn from(notice: Notice) -> Self {
        ServerMessage::Help {
            title: notice.title,
            message: notice.message,
        }
    }
}
