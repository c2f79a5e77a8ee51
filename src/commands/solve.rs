//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::oracle::TargetOracle;
use crate::solver::{Solution, Solver, Strategy};
use anyhow::Result;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not in the solver's dictionary
/// - The solve session fails (oracle rejection or inconsistent feedback)
pub fn solve_word<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<Solution> {
    let oracle = TargetOracle::new(&config.target, solver.dictionary())?;
    Ok(solver.solve(&oracle)?)
}
