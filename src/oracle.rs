//! Feedback oracles
//!
//! An oracle scores guesses against a hidden target. The solver only ever
//! talks to the [`Oracle`] trait.

use crate::core::{Dictionary, Feedback, Word};
use thiserror::Error;

/// Errors raised by an oracle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The guess is not an accepted dictionary word
    #[error("invalid guess '{0}': not in the dictionary")]
    InvalidGuess(String),
    /// The hidden target is not an accepted dictionary word
    #[error("unknown target '{0}': not in the dictionary")]
    UnknownTarget(String),
}

/// Scores a guess with one classification per position
pub trait Oracle {
    /// Classify every letter of `guess`
    ///
    /// # Errors
    /// Returns `OracleError::InvalidGuess` if the guess is not accepted.
    fn classify(&self, guess: &Word) -> Result<Feedback, OracleError>;
}

/// Oracle bound to a hidden target word from a dictionary
pub struct TargetOracle<'a> {
    target: Word,
    dictionary: &'a Dictionary,
}

impl<'a> TargetOracle<'a> {
    /// Bind an oracle to `target`
    ///
    /// # Errors
    /// Returns `OracleError::UnknownTarget` if the target is not a
    /// dictionary word.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Dictionary, Word};
    /// use wordle_greedy::oracle::{Oracle, TargetOracle};
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate"]);
    /// let oracle = TargetOracle::new("slate", &dictionary).unwrap();
    ///
    /// let feedback = oracle.classify(&Word::new("crane").unwrap()).unwrap();
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// assert!(oracle.classify(&Word::new("zzzzz").unwrap()).is_err());
    /// ```
    pub fn new(target: &str, dictionary: &'a Dictionary) -> Result<Self, OracleError> {
        let target = dictionary
            .get(target)
            .cloned()
            .ok_or_else(|| OracleError::UnknownTarget(target.to_string()))?;

        Ok(Self { target, dictionary })
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl Oracle for TargetOracle<'_> {
    fn classify(&self, guess: &Word) -> Result<Feedback, OracleError> {
        if !self.dictionary.contains(guess) {
            return Err(OracleError::InvalidGuess(guess.text().to_string()));
        }
        Ok(Feedback::calculate(guess, &self.target))
    }
}
