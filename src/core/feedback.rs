//! Wordle feedback classification and representation
//!
//! Each position of a guess is classified as one of:
//! - Correct (green): letter is at this exact position in the target
//! - Present (yellow): letter occurs in the target, but not here
//! - Absent (gray): letter does not occur, or all its occurrences are used up

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Classification of a single letter at a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Parse from a feedback character
    ///
    /// Accepts 'G'/'g'/🟩 for Correct, 'Y'/'y'/🟨 for Present and
    /// '-'/'_'/'.'/⬜/⬛ for Absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Single-character text form (`G`, `Y`, `-`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when feedback text cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

/// Feedback for one guess: exactly one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are attributed with a shared per-letter budget:
    /// a letter is never marked Correct or Present more often than it
    /// occurs in the target, and Correct positions draw from the budget
    /// before Present ones.
    ///
    /// # Algorithm
    /// 1. Count the letters of the target
    /// 2. First pass: mark exact matches Correct and consume their letter
    /// 3. Second pass: mark the rest Present while budget remains, else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let target = Word::new("aabbc").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &target),
    ///     Feedback::new([Correct, Present, Present, Absent, Absent])
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LENGTH];
        let mut scored = [false; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: greens
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Classification::Correct;
                scored[i] = true;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: yellows from the remaining budget
        for (i, &g) in guess.chars().iter().enumerate() {
            if scored[i] {
                continue;
            }
            let remaining = &mut available[usize::from(g - b'a')];
            if *remaining > 0 {
                result[i] = Classification::Present;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// The per-position classifications
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for classification in &self.0 {
            write!(f, "{}", classification.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(symbols.len()));
        }

        let mut result = [Classification::Absent; WORD_LENGTH];
        for (slot, &ch) in result.iter_mut().zip(&symbols) {
            *slot = Classification::from_char(ch).ok_or(FeedbackParseError::InvalidSymbol(ch))?;
        }

        Ok(Self(result))
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;
    use test_case::test_case;

    fn calc(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test_case("abcde", "aabbc", [Correct, Present, Present, Absent, Absent]; "duplicate budget regression")]
    #[test_case("crane", "slate", [Absent, Absent, Correct, Absent, Correct]; "no yellows")]
    #[test_case("speed", "erase", [Present, Absent, Present, Present, Absent]; "two yellow e")]
    #[test_case("robot", "floor", [Present, Present, Absent, Correct, Absent]; "green consumes before yellow")]
    #[test_case("geese", "those", [Absent, Absent, Absent, Correct, Correct]; "surplus duplicates absent")]
    #[test_case("eerie", "crepe", [Present, Absent, Present, Absent, Correct]; "mixed duplicates")]
    #[test_case("abcde", "fghij", [Absent, Absent, Absent, Absent, Absent]; "all gray")]
    fn calculate_matches_expected(guess: &str, target: &str, expected: [Classification; 5]) {
        assert_eq!(calc(guess, target), Feedback::new(expected), "guess={guess}, target={target}");
    }

    #[test]
    fn feedback_against_self_is_perfect() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "eerie"] {
            assert!(calc(word, word).is_perfect());
        }
    }

    #[test]
    fn marked_letters_never_exceed_target_count() {
        let words = ["aabbc", "eerie", "speed", "erase", "llama", "aaaaa", "abide", "geese"];
        for guess in words {
            for target in words {
                let feedback = calc(guess, target);
                let target_word = Word::new(target).unwrap();
                for letter in b'a'..=b'z' {
                    let marked = guess
                        .bytes()
                        .zip(feedback.classifications())
                        .filter(|&(g, &c)| g == letter && c != Absent)
                        .count();
                    let occurs = target_word.chars().iter().filter(|&&t| t == letter).count();
                    assert!(marked <= occurs, "guess={guess}, target={target}");
                }
            }
        }
    }

    #[test]
    fn duplicate_guess_letter_single_target_occurrence() {
        // One 'l' in the target: exactly one of the three guessed 'l's is marked
        let feedback = calc("lolly", "glyph");
        let marked = "lolly"
            .bytes()
            .zip(feedback.classifications())
            .filter(|&(g, &c)| g == b'l' && c != Absent)
            .count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn parse_accepts_text_and_emoji() {
        let text: Feedback = "GY-g_".parse().unwrap();
        let emoji: Feedback = "🟩🟨⬜🟩⬛".parse().unwrap();
        assert_eq!(text, emoji);
        assert_eq!(text, Feedback::new([Correct, Present, Absent, Correct, Absent]));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!("GYG".parse::<Feedback>(), Err(FeedbackParseError::InvalidLength(3)));
        assert_eq!("GYGGYX".parse::<Feedback>(), Err(FeedbackParseError::InvalidLength(6)));
        assert_eq!("GXGGY".parse::<Feedback>(), Err(FeedbackParseError::InvalidSymbol('X')));
    }

    #[test]
    fn display_round_trips_text_form() {
        let feedback = calc("robot", "floor");
        assert_eq!(feedback.to_string(), "YY-G-");
        assert_eq!(feedback.to_string().parse::<Feedback>(), Ok(feedback));
    }
}
