//! Word lists for Wordle solving
//!
//! Provides the embedded dictionary and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        assert_eq!(Dictionary::from_strs(WORDS).len(), WORDS_COUNT);
    }

    #[test]
    fn default_opener_is_embedded() {
        assert!(WORDS.contains(&crate::solver::DEFAULT_OPENER));
    }
}
