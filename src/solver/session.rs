//! Per-game solving state
//!
//! A session owns everything one game accumulates: the surviving
//! candidates, the constraint store, the guessed letters and the feedback
//! history. It is created per game and dropped afterwards.

use super::constraints::ConstraintStore;
use super::error::SolveError;
use super::filter::filter_candidates;
use super::strategy::LetterSet;
use crate::core::{Dictionary, Feedback, Word};
use tracing::debug;

/// Where a session stands after its latest round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// More than one candidate remains
    Guessing,
    /// Exactly one candidate remains
    Solved(&'a Word),
    /// No candidate is consistent with the feedback
    Failed,
}

/// State of one game in progress
#[derive(Debug, Clone)]
pub struct Session<'a> {
    candidates: Vec<&'a Word>,
    constraints: ConstraintStore,
    guessed: LetterSet,
    history: Vec<(Word, Feedback)>,
}

impl<'a> Session<'a> {
    /// Start a game with every dictionary word as a candidate
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            candidates: dictionary.words().iter().collect(),
            constraints: ConstraintStore::new(),
            guessed: LetterSet::default(),
            history: Vec::new(),
        }
    }

    /// Rebuild a session from a recorded history
    ///
    /// Replaying stops early if the history becomes inconsistent; the
    /// returned session is then in the `Failed` state.
    #[must_use]
    pub fn replay(dictionary: &'a Dictionary, history: &[(Word, Feedback)]) -> Self {
        let mut session = Self::new(dictionary);
        for (guess, feedback) in history {
            if session.record(guess, *feedback) == SessionState::Failed {
                break;
            }
        }
        session
    }

    #[must_use]
    pub fn state(&self) -> SessionState<'a> {
        match self.candidates.as_slice() {
            [] => SessionState::Failed,
            [only] => SessionState::Solved(*only),
            _ => SessionState::Guessing,
        }
    }

    /// Apply the feedback for `guess` and narrow the candidates
    pub fn record(&mut self, guess: &Word, feedback: Feedback) -> SessionState<'a> {
        self.guessed.extend(guess.chars().iter().copied());
        self.constraints.apply(guess, &feedback);
        self.candidates = filter_candidates(&self.candidates, &self.constraints);
        self.history.push((guess.clone(), feedback));

        debug!(
            round = self.history.len(),
            %guess,
            %feedback,
            remaining = self.candidates.len(),
            "recorded feedback"
        );

        self.state()
    }

    /// Surviving candidates, in dictionary order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &LetterSet {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Diagnostic error describing why no candidate survived
    #[must_use]
    pub fn inconsistency(&self) -> SolveError {
        SolveError::Inconsistent {
            history: self.history.clone(),
            constraints: self.constraints.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "slate", "plate", "irate", "ghost"])
    }

    fn score(guess: &str, target: &str) -> (Word, Feedback) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new(target).unwrap());
        (guess, feedback)
    }

    #[test]
    fn new_session_holds_whole_dictionary() {
        let dictionary = dictionary();
        let session = Session::new(&dictionary);

        assert_eq!(session.candidates().len(), dictionary.len());
        assert_eq!(session.state(), SessionState::Guessing);
        assert!(session.guessed_letters().is_empty());
        assert!(session.constraints().is_empty());
    }

    #[test]
    fn record_narrows_and_tracks_letters() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary);

        let (guess, feedback) = score("slate", "plate");
        let state = session.record(&guess, feedback);

        assert_eq!(state, SessionState::Solved(dictionary.get("plate").unwrap()));
        assert_eq!(session.history().len(), 1);
        let mut letters: Vec<u8> = session.guessed_letters().iter().copied().collect();
        letters.sort_unstable();
        assert_eq!(letters, b"aelst");
    }

    #[test]
    fn guessed_letters_only_grow() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary);

        let (first, feedback) = score("ghost", "irate");
        session.record(&first, feedback);
        let after_first = session.guessed_letters().len();

        let (second, feedback) = score("slate", "irate");
        session.record(&second, feedback);
        assert!(session.guessed_letters().len() >= after_first);
        assert!(session.guessed_letters().contains(&b'g'));
    }

    #[test]
    fn contradictory_feedback_fails() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary);

        let guess = Word::new("crane").unwrap();
        let state = session.record(&guess, Feedback::new([crate::core::Classification::Absent; 5]));
        // only GHOST avoids every letter of CRANE
        assert_eq!(session.candidates().iter().map(|w| w.text()).collect::<Vec<_>>(), ["ghost"]);
        assert_eq!(state, SessionState::Solved(session.candidates()[0]));

        let state = session.record(&guess, Feedback::PERFECT);
        assert_eq!(state, SessionState::Failed);
        assert!(matches!(session.inconsistency(), SolveError::Inconsistent { history, .. } if history.len() == 2));
    }

    #[test]
    fn replay_matches_incremental_recording() {
        let dictionary = dictionary();
        let history = vec![score("ghost", "irate"), score("crane", "irate")];

        let mut incremental = Session::new(&dictionary);
        for (guess, feedback) in &history {
            incremental.record(guess, *feedback);
        }

        let replayed = Session::replay(&dictionary, &history);
        assert_eq!(replayed.candidates(), incremental.candidates());
        assert_eq!(replayed.constraints(), incremental.constraints());
        assert_eq!(replayed.history(), incremental.history());
    }
}
