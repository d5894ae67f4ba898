use serde::Serialize;

/// One play session: a root word, the words accepted from it and the score.
///
/// The only mutation is [`Round::accept`], which keeps `score` equal to the
/// total length of `used_words`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    /// Most recent first
    used_words: Vec<String>,
    score: u32,
}

/// Read-only view of a round for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: u32,
}

impl Round {
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: root_word.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Record an accepted word at the front of the list and add its points
    pub(crate) fn accept(&mut self, word: String, points: u32) {
        self.used_words.insert(0, word);
        self.score += points;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
        }
    }
}
