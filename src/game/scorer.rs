pub struct Scorer;

impl Scorer {
    /// Points for an accepted word: one per letter.
    /// Letters are counted as characters, so "smörgås" is worth 7.
    pub fn score(word: &str) -> u32 {
        word.chars().count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_word_length() {
        assert_eq!(Scorer::score("silk"), 4);
        assert_eq!(Scorer::score("worms"), 5);
        assert_eq!(Scorer::score("milk"), 4);
    }

    #[test]
    fn test_score_counts_characters_not_bytes() {
        assert_eq!(Scorer::score("smörgås"), 7);
        assert_eq!(Scorer::score("år"), 2);
    }
}
