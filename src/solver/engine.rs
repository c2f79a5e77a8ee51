//! Main Wordle solver interface

use super::error::SolveError;
use super::session::{Session, SessionState};
use super::strategy::Strategy;
use crate::core::{Dictionary, Feedback, Word};
use crate::oracle::Oracle;
use tracing::{info, warn};

/// Default opening guess
pub const DEFAULT_OPENER: &str = "slate";

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fixed first guess; ignored if it is not a dictionary word
    pub opener: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

/// One round of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a successful solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The deduced hidden word
    pub answer: Word,
    /// Every oracle round, in order
    pub steps: Vec<GuessStep>,
}

impl Solution {
    /// Number of guesses submitted to the oracle
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the last submitted guess was the answer itself
    ///
    /// The solver stops as soon as one candidate remains, so the answer is
    /// often deduced without being guessed.
    #[must_use]
    pub fn answer_was_guessed(&self) -> bool {
        self.steps.last().is_some_and(|step| step.feedback.is_perfect())
    }
}

/// Main Wordle solver
///
/// Coordinates sessions over one dictionary using a given strategy.
#[derive(Debug)]
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a Dictionary,
    opener: Option<&'a Word>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver with the default configuration
    pub fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self::with_config(strategy, dictionary, &SolverConfig::default())
    }

    /// Create a solver with an explicit configuration
    pub fn with_config(strategy: S, dictionary: &'a Dictionary, config: &SolverConfig) -> Self {
        let opener = dictionary.get(&config.opener);
        if opener.is_none() && !dictionary.is_empty() {
            warn!(
                opener = %config.opener,
                "opener is not in the dictionary, falling back to the strategy"
            );
        }

        Self {
            strategy,
            dictionary,
            opener,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Start a fresh game
    #[must_use]
    pub fn start(&self) -> Session<'a> {
        Session::new(self.dictionary)
    }

    /// Pick the next guess for a session
    ///
    /// The first round uses the configured opener. Later rounds choose among
    /// candidates not played yet, since a played word that did not score
    /// perfect cannot be the target. Returns `None` once the session has no
    /// candidates left.
    pub fn next_guess(&self, session: &Session<'a>) -> Option<&'a Word> {
        if session.history().is_empty()
            && let Some(opener) = self.opener
        {
            return Some(opener);
        }

        let played = |word: &Word| session.history().iter().any(|(guess, _)| guess == word);
        let unplayed: Vec<&'a Word> = session
            .candidates()
            .iter()
            .copied()
            .filter(|word| !played(word))
            .collect();

        // Only contradictory feedback leaves nothing but played words
        let pool = if unplayed.is_empty() {
            session.candidates()
        } else {
            &unplayed
        };
        self.strategy.select_guess(pool, session.guessed_letters())
    }

    /// Play one full game against `oracle`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dictionary is empty
    /// - The oracle rejects a guess
    /// - Feedback eliminates every candidate
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Dictionary;
    /// use wordle_greedy::oracle::TargetOracle;
    /// use wordle_greedy::solver::{OverlapStrategy, Solver};
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "plate", "irate"]);
    /// let solver = Solver::new(OverlapStrategy, &dictionary);
    /// let oracle = TargetOracle::new("plate", &dictionary).unwrap();
    ///
    /// let solution = solver.solve(&oracle).unwrap();
    /// assert_eq!(solution.answer.text(), "plate");
    /// assert_eq!(solution.guess_count(), 1);
    /// ```
    pub fn solve(&self, oracle: &impl Oracle) -> Result<Solution, SolveError> {
        if self.dictionary.is_empty() {
            return Err(SolveError::EmptyDictionary);
        }

        let mut session = self.start();
        let mut steps = Vec::new();

        loop {
            match session.state() {
                SessionState::Solved(answer) => {
                    info!(%answer, guesses = steps.len(), "solved");
                    return Ok(Solution {
                        answer: answer.clone(),
                        steps,
                    });
                }
                SessionState::Failed => return Err(session.inconsistency()),
                SessionState::Guessing => {}
            }

            let guess = self
                .next_guess(&session)
                .ok_or_else(|| session.inconsistency())?;
            let feedback = oracle.classify(guess)?;

            let candidates_before = session.candidates().len();
            session.record(guess, feedback);
            let candidates_after = session.candidates().len();

            debug_assert!(candidates_after <= candidates_before, "candidate set grew");

            steps.push(GuessStep {
                guess: guess.clone(),
                feedback,
                candidates_before,
                candidates_after,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::oracle::{OracleError, TargetOracle};
    use crate::solver::OverlapStrategy;
    use std::cell::Cell;

    /// Oracle that answers every guess with the same feedback
    struct FixedOracle {
        feedback: Feedback,
        calls: Cell<usize>,
    }

    impl FixedOracle {
        fn new(feedback: Feedback) -> Self {
            Self {
                feedback,
                calls: Cell::new(0),
            }
        }
    }

    impl Oracle for FixedOracle {
        fn classify(&self, _guess: &Word) -> Result<Feedback, OracleError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.feedback)
        }
    }

    struct RejectingOracle;

    impl Oracle for RejectingOracle {
        fn classify(&self, guess: &Word) -> Result<Feedback, OracleError> {
            Err(OracleError::InvalidGuess(guess.text().to_string()))
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "crane", "slate", "plate", "irate", "grate", "crate", "ghost", "bumpy", "lolly",
        ])
    }

    #[test]
    fn opener_used_first() {
        let dictionary = dictionary();
        let solver = Solver::new(OverlapStrategy, &dictionary);
        let session = solver.start();

        assert_eq!(solver.next_guess(&session).unwrap().text(), "slate");
    }

    #[test]
    fn missing_opener_falls_back_to_strategy() {
        let dictionary = Dictionary::from_strs(&["crane", "ghost"]);
        let config = SolverConfig {
            opener: "zzzzz".to_string(),
        };
        let solver = Solver::with_config(OverlapStrategy, &dictionary, &config);

        // Nothing guessed yet, so every word ties and the first one wins
        assert_eq!(solver.next_guess(&solver.start()).unwrap().text(), "crane");
    }

    #[test]
    fn solves_every_dictionary_word() {
        let dictionary = dictionary();
        let solver = Solver::new(OverlapStrategy, &dictionary);

        for target in dictionary.words() {
            let oracle = TargetOracle::new(target.text(), &dictionary).unwrap();
            let solution = solver.solve(&oracle).unwrap();

            assert_eq!(&solution.answer, target);
            assert!(solution.guess_count() <= dictionary.len());
            for step in &solution.steps {
                assert!(step.candidates_after <= step.candidates_before);
            }
            for (i, step) in solution.steps.iter().enumerate() {
                assert!(solution.steps[..i].iter().all(|prev| prev.guess != step.guess));
            }
        }
    }

    #[test]
    fn played_word_is_not_repeated_when_candidates_hold() {
        // SASSY vs YASSY scores -GGGG: the leading 's' is surplus, so both
        // words stay candidates and tie on overlap
        let dictionary = Dictionary::from_strs(&["sassy", "yassy"]);
        let solver = Solver::new(OverlapStrategy, &dictionary);
        let oracle = TargetOracle::new("yassy", &dictionary).unwrap();

        let solution = solver.solve(&oracle).unwrap();

        assert_eq!(solution.answer.text(), "yassy");
        let guesses: Vec<&str> = solution.steps.iter().map(|s| s.guess.text()).collect();
        assert_eq!(guesses, ["sassy", "yassy"]);
        assert_eq!(solution.steps[0].candidates_after, 2);
        assert!(solution.answer_was_guessed());
    }

    #[test]
    fn solver_debug_names_its_opener() {
        let dictionary = Dictionary::from_strs(&["crane", "slate"]);
        let solver = Solver::new(OverlapStrategy, &dictionary);

        let debug = format!("{solver:?}");
        assert!(debug.starts_with("Solver"));
        assert!(debug.contains("opener: Some(Word { text: \"slate\""));
    }

    #[test]
    fn single_word_dictionary_solved_without_feedback() {
        let dictionary = Dictionary::from_strs(&["crane"]);
        let solver = Solver::new(OverlapStrategy, &dictionary);
        let oracle = FixedOracle::new(Feedback::PERFECT);

        let solution = solver.solve(&oracle).unwrap();

        assert_eq!(solution.answer.text(), "crane");
        assert_eq!(solution.guess_count(), 0);
        assert_eq!(oracle.calls.get(), 0);
        assert!(!solution.answer_was_guessed());
    }

    #[test]
    fn empty_candidate_set_fails() {
        let dictionary = dictionary();
        let solver = Solver::new(OverlapStrategy, &dictionary);
        // No word other than SLATE itself uses all of its letters
        let oracle = FixedOracle::new(Feedback::new([Classification::Present; 5]));

        let result = solver.solve(&oracle);

        match result {
            Err(SolveError::Inconsistent {
                history,
                constraints,
            }) => {
                assert!(!history.is_empty());
                assert_eq!(history[0].0.text(), "slate");
                assert!(constraints.misplaced().contains_key(&b's'));
            }
            other => panic!("expected inconsistency, got {other:?}"),
        }
    }

    #[test]
    fn empty_dictionary_fails() {
        let dictionary = Dictionary::default();
        let solver = Solver::new(OverlapStrategy, &dictionary);
        let oracle = FixedOracle::new(Feedback::PERFECT);

        assert_eq!(solver.solve(&oracle), Err(SolveError::EmptyDictionary));
        assert_eq!(oracle.calls.get(), 0);
    }

    #[test]
    fn oracle_errors_propagate_without_retry() {
        let dictionary = dictionary();
        let solver = Solver::new(OverlapStrategy, &dictionary);

        assert_eq!(
            solver.solve(&RejectingOracle),
            Err(SolveError::Oracle(OracleError::InvalidGuess("slate".to_string())))
        );
    }

    #[test]
    fn steps_record_candidate_counts() {
        let dictionary = dictionary();
        let solver = Solver::new(OverlapStrategy, &dictionary);
        let oracle = TargetOracle::new("grate", &dictionary).unwrap();

        let solution = solver.solve(&oracle).unwrap();

        assert_eq!(solution.steps[0].candidates_before, dictionary.len());
        for pair in solution.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        assert_eq!(solution.steps.last().unwrap().candidates_after, 1);
    }
}
