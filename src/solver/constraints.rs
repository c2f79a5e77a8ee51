//! Accumulated letter constraints
//!
//! The store records what the feedback so far has proven about the target:
//! letters fixed at a position, letters present but barred from some
//! positions, and letters absent altogether.

use crate::core::{Classification, Feedback, WORD_LENGTH, Word};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Knowledge derived from every feedback round of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    confirmed: [Option<u8>; WORD_LENGTH],
    misplaced: BTreeMap<u8, BTreeSet<usize>>,
    excluded: BTreeSet<u8>,
}

impl ConstraintStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters known to occupy each position
    #[inline]
    #[must_use]
    pub const fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    /// Letters known to be present, with the positions they cannot occupy
    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.misplaced
    }

    /// Letters known to be absent from the target
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &BTreeSet<u8> {
        &self.excluded
    }

    /// True when no feedback has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed.iter().all(Option::is_none)
            && self.misplaced.is_empty()
            && self.excluded.is_empty()
    }

    /// Whether `letter` is known to occur somewhere in the target
    #[must_use]
    pub fn has_presence_evidence(&self, letter: u8) -> bool {
        self.confirmed.contains(&Some(letter)) || self.misplaced.contains_key(&letter)
    }

    /// Record one feedback round
    ///
    /// Positions are applied left to right. An Absent letter already known
    /// present, from a prior round or an earlier position of this guess, is
    /// treated as "not at this position" instead of "not in the word". A
    /// later Correct or Present for an excluded letter lifts the exclusion.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let round = guess
            .chars()
            .iter()
            .copied()
            .zip(feedback.classifications().iter().copied())
            .enumerate();

        for (position, (letter, classification)) in round {
            match classification {
                Classification::Correct => {
                    self.confirmed[position] = Some(letter);
                    self.excluded.remove(&letter);
                }
                Classification::Present => self.bar_position(letter, position),
                Classification::Absent if self.has_presence_evidence(letter) => {
                    self.bar_position(letter, position);
                }
                Classification::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }

        debug_assert!(self.is_consistent(), "constraint store invariant broken: {self}");
    }

    /// Pure form of [`apply`](Self::apply): the store after one more round
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    /// use wordle_greedy::solver::ConstraintStore;
    ///
    /// // SPEED against ABIDE: one 'e' present, the other surplus
    /// let guess = Word::new("speed").unwrap();
    /// let feedback: Feedback = "--Y-Y".parse().unwrap();
    ///
    /// let store = ConstraintStore::new().updated(&guess, &feedback);
    /// assert!(!store.excluded().contains(&b'e'));
    /// assert_eq!(store.misplaced()[&b'e'].iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    #[must_use]
    pub fn updated(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.apply(guess, feedback);
        next
    }

    /// No letter is both excluded and known present
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.excluded
            .iter()
            .all(|&letter| !self.has_presence_evidence(letter))
    }

    fn bar_position(&mut self, letter: u8, position: usize) {
        self.misplaced.entry(letter).or_default().insert(position);
        self.excluded.remove(&letter);
    }
}

impl fmt::Display for ConstraintStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .confirmed
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect();
        write!(f, "confirmed={pattern}")?;

        write!(f, " misplaced={{")?;
        for (i, (letter, positions)) in self.misplaced.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{positions:?}", char::from(*letter))?;
        }
        write!(f, "}}")?;

        let excluded: String = self.excluded.iter().copied().map(char::from).collect();
        write!(f, " excluded={{{excluded}}}")
    }
}
