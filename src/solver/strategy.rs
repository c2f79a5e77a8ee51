//! Guess selection strategies
//!
//! Defines the Strategy trait and the greedy letter-overlap heuristic.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Distinct letters that have appeared in any guess so far
pub type LetterSet = FxHashSet<u8>;

/// A strategy for picking the next guess from the surviving candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Word], guessed: &LetterSet) -> Option<&'a Word>;
}

/// Greedy overlap-minimising strategy
///
/// Picks the candidate sharing the fewest letters (duplicates counted) with
/// everything guessed so far, hoping to expose still-unknown letters. It
/// ignores positional and duplicate-letter structure, so it is a heuristic,
/// not an optimal policy.
///
/// Ties go to the first candidate in iteration order. Solver sessions keep
/// candidates in dictionary order, so ties resolve to the lexicographically
/// smallest word.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapStrategy;

impl Strategy for OverlapStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word], guessed: &LetterSet) -> Option<&'a Word> {
        candidates
            .iter()
            .copied()
            .min_by_key(|word| letter_overlap(word, guessed))
    }
}

/// Number of letters in `word` (counting duplicates) already guessed
///
/// # Examples
/// ```
/// use wordle_greedy::core::Word;
/// use wordle_greedy::solver::{LetterSet, letter_overlap};
///
/// let guessed: LetterSet = "slate".bytes().collect();
/// assert_eq!(letter_overlap(&Word::new("erase").unwrap(), &guessed), 4);
/// assert_eq!(letter_overlap(&Word::new("ukase").unwrap(), &guessed), 3);
/// ```
#[must_use]
pub fn letter_overlap(word: &Word, guessed: &LetterSet) -> usize {
    word.chars().iter().filter(|&&c| guessed.contains(&c)).count()
}
