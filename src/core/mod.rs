//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the dictionary. Everything here is pure
//! data with no I/O.

mod dictionary;
mod feedback;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Classification, Feedback, FeedbackParseError};
pub use word::{WORD_LENGTH, Word, WordError};
