//! Candidate filtering
//!
//! Keeps exactly the words consistent with every accumulated constraint.

use super::constraints::ConstraintStore;
use crate::core::Word;

/// Check whether `word` satisfies every constraint in `store`
///
/// A word passes when its confirmed positions match, it uses no excluded
/// letter, no misplaced letter sits at a barred position, and every
/// misplaced letter occurs somewhere in it.
#[must_use]
pub fn is_consistent(word: &Word, store: &ConstraintStore) -> bool {
    let mut present_letters = 0u32;

    for (position, &letter) in word.chars().iter().enumerate() {
        if store.excluded().contains(&letter) {
            return false;
        }

        if let Some(expected) = store.confirmed()[position]
            && expected != letter
        {
            return false;
        }

        if let Some(barred) = store.misplaced().get(&letter) {
            if barred.contains(&position) {
                return false;
            }
            present_letters |= 1 << (letter - b'a');
        }
    }

    present_letters.count_ones() as usize == store.misplaced().len()
}

/// Reduce `candidates` to those consistent with `store`
///
/// Input order is preserved. An empty store returns the input unchanged.
///
/// # Examples
/// ```
/// use wordle_greedy::core::{Feedback, Word};
/// use wordle_greedy::solver::{ConstraintStore, filter_candidates};
///
/// let words: Vec<Word> = ["crane", "slate", "plate"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("slate").unwrap();
/// let feedback = Feedback::calculate(&guess, &words[2]);
/// let store = ConstraintStore::new().updated(&guess, &feedback);
///
/// let remaining = filter_candidates(&candidates, &store);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "plate");
/// ```
#[must_use]
pub fn filter_candidates<'a>(candidates: &[&'a Word], store: &ConstraintStore) -> Vec<&'a Word> {
    if store.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .copied()
        .filter(|word| is_consistent(word, store))
        .collect()
}
