//! Solver failure modes

use super::constraints::ConstraintStore;
use crate::core::{Feedback, Word};
use crate::oracle::OracleError;
use thiserror::Error;

/// Why a solve session ended without an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("the dictionary is empty")]
    EmptyDictionary,

    /// The oracle rejected a guess; guesses come from the dictionary, so
    /// this points at a bug in guess generation
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Feedback ruled out every candidate
    #[error(
        "no candidates remain after {} guess(es) [{}]; {constraints}",
        .history.len(),
        format_history(.history)
    )]
    Inconsistent {
        history: Vec<(Word, Feedback)>,
        constraints: ConstraintStore,
    },
}

/// Render a history as `slate=--G-G, crony=G----`
#[must_use]
pub fn format_history(history: &[(Word, Feedback)]) -> String {
    history
        .iter()
        .map(|(guess, feedback)| format!("{guess}={feedback}"))
        .collect::<Vec<_>>()
        .join(", ")
}
