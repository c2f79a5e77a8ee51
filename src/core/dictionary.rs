//! Immutable word dictionary
//!
//! The dictionary is built once per run and passed by reference into
//! oracles and solvers. Words are deduplicated and kept in lexicographic
//! order, so every iteration over it is reproducible.

use super::word::Word;
use rustc_hash::FxHashSet;

/// A deduplicated, sorted set of valid words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Dictionary, Word};
    ///
    /// let dictionary = Dictionary::new(["table", "apple", "table"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.words()[0].text(), "apple");
    /// assert!(dictionary.contains_str("table"));
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();

        let index = words.iter().map(|w| w.text().to_string()).collect();

        Self { words, index }
    }

    /// Build a dictionary from string slices, skipping invalid entries
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words.iter().filter_map(|&w| Word::new(w).ok()))
    }

    /// All words, in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is a member
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Check membership of raw text, case-insensitively
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.contains(&w))
    }

    /// Look up the dictionary's own copy of a word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words
            .binary_search(&word)
            .ok()
            .map(|i| &self.words[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_and_sorts() {
        let dictionary = Dictionary::from_strs(&["snake", "apple", "SNAKE", "chair"]);
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "chair", "snake"]);
    }

    #[test]
    fn skips_invalid_entries() {
        let dictionary = Dictionary::from_strs(&["apple", "toolong", "abc", "sl4te"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn membership() {
        let dictionary = Dictionary::from_strs(&["apple", "table"]);
        assert!(dictionary.contains(&Word::new("apple").unwrap()));
        assert!(!dictionary.contains(&Word::new("chair").unwrap()));
        assert!(dictionary.contains_str("TABLE"));
        assert!(!dictionary.contains_str("tables"));
    }

    #[test]
    fn get_returns_dictionary_copy() {
        let dictionary = Dictionary::from_strs(&["apple", "table"]);
        assert_eq!(dictionary.get("Table").map(Word::text), Some("table"));
        assert!(dictionary.get("chair").is_none());
        assert!(dictionary.get("bad").is_none());
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }
}
