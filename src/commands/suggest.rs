//! Suggestion command
//!
//! Replays a recorded game and reports what is still possible.

use crate::core::{Feedback, Word};
use crate::solver::{ConstraintStore, Session, SessionState, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Outcome of replaying a recorded history
pub struct Suggestion {
    pub history: Vec<(Word, Feedback)>,
    pub candidates: Vec<Word>,
    pub constraints: ConstraintStore,
    /// Next guess to play, `None` if no candidates remain
    pub next_guess: Option<Word>,
    pub solved: bool,
}

/// Parse one `guess=feedback` entry, e.g. `slate=--G-Y`
///
/// # Errors
///
/// Returns an error if the entry has no `=` or either side is malformed.
pub fn parse_entry(entry: &str) -> Result<(Word, Feedback)> {
    let Some((guess, feedback)) = entry.split_once('=') else {
        bail!("expected GUESS=FEEDBACK, got '{entry}'");
    };

    let guess = Word::new(guess.trim()).with_context(|| format!("invalid guess in '{entry}'"))?;
    let feedback = feedback
        .parse::<Feedback>()
        .with_context(|| format!("invalid feedback in '{entry}'"))?;

    Ok((guess, feedback))
}

/// Replay `entries` and suggest the next guess
///
/// # Errors
///
/// Returns an error if any entry fails to parse.
pub fn suggest<S: Strategy>(entries: &[String], solver: &Solver<S>) -> Result<Suggestion> {
    let history = entries
        .iter()
        .map(|entry| parse_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let session = Session::replay(solver.dictionary(), &history);
    let state = session.state();

    let next_guess = match state {
        SessionState::Failed => None,
        SessionState::Solved(answer) => Some(answer),
        SessionState::Guessing => solver.next_guess(&session),
    };

    Ok(Suggestion {
        history: session.history().to_vec(),
        candidates: session.candidates().iter().map(|&w| w.clone()).collect(),
        constraints: session.constraints().clone(),
        next_guess: next_guess.cloned(),
        solved: matches!(state, SessionState::Solved(_)),
    })
}
