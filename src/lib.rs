//! Greedy Wordle Solver
//!
//! Deduces a hidden five-letter word by accumulating feedback constraints,
//! filtering a fixed dictionary and guessing the candidate that repeats the
//! fewest already-tried letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_greedy::core::Dictionary;
//! use wordle_greedy::oracle::TargetOracle;
//! use wordle_greedy::solver::{OverlapStrategy, Solver};
//! use wordle_greedy::wordlists::loader::embedded_dictionary;
//!
//! let dictionary = embedded_dictionary();
//! let solver = Solver::new(OverlapStrategy, &dictionary);
//! let oracle = TargetOracle::new("crane", &dictionary).unwrap();
//!
//! let solution = solver.solve(&oracle).unwrap();
//! assert_eq!(solution.answer.text(), "crane");
//! ```

// Core domain types
pub mod core;

// Feedback sources
pub mod oracle;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup for the binary
pub mod logging;
