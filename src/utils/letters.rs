use std::collections::HashMap;

/// Multiset of characters, counted per occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: HashMap<char, usize>,
}

impl LetterBag {
    /// Take one occurrence of a letter out of the bag.
    /// Returns false if the letter is not available.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of remaining occurrences of a letter
    #[cfg(test)]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether every letter of `word` can be drawn from this bag,
    /// each occurrence in the bag used at most once. The bag itself is untouched.
    pub fn contains_word(&self, word: &str) -> bool {
        let mut working = self.clone();
        word.chars().all(|letter| working.take(letter))
    }
}

impl From<&str> for LetterBag {
    fn from(word: &str) -> Self {
        let mut counts = HashMap::new();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }
}
