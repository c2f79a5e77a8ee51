//! Wordle solving algorithms
//!
//! Constraint accumulation, candidate filtering, greedy guess selection and
//! the loop that drives them.

mod constraints;
mod engine;
mod error;
mod filter;
mod session;
pub mod strategy;

pub use constraints::ConstraintStore;
pub use engine::{DEFAULT_OPENER, GuessStep, Solution, Solver, SolverConfig};
pub use error::{SolveError, format_history};
pub use filter::{filter_candidates, is_consistent};
pub use session::{Session, SessionState};
pub use strategy::{LetterSet, OverlapStrategy, Strategy, letter_overlap};
