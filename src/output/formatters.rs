//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use colored::{ColoredString, Colorize};

/// Render one guess as colored letter tiles
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.classifications())
        .map(|(&letter, &class)| tile(letter, class).to_string())
        .collect()
}

fn tile(letter: u8, class: Classification) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match class {
        Classification::Correct => text.black().on_green().bold(),
        Classification::Present => text.black().on_yellow().bold(),
        Classification::Absent => text.white().on_bright_black(),
    }
}

fn blocks(filled: usize, width: usize) -> String {
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of a guess-count histogram
///
/// Non-zero rows always get at least one block.
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    if count == 0 || max_count == 0 {
        return blocks(0, width);
    }
    blocks((count * width / max_count).max(1).min(width), width)
}

/// "guess" or "guesses" to follow a count of `n`
#[must_use]
pub const fn guess_noun(n: usize) -> &'static str {
    if n == 1 { "guess" } else { "guesses" }
}

/// Format words as an uppercase, comma-separated list, truncated to `limit`
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect();

    let list = shown.join(", ");
    if words.len() > limit {
        format!("{list}, ... (+{} more)", words.len() - limit)
    } else {
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_bar_keeps_small_rows_visible() {
        assert_eq!(distribution_bar(1, 1000, 10), "█░░░░░░░░░");
        assert_eq!(distribution_bar(0, 1000, 10), "░░░░░░░░░░");
        assert_eq!(distribution_bar(1000, 1000, 10), "██████████");
    }

    #[test]
    fn guess_noun_agrees_with_count() {
        assert_eq!(guess_noun(0), "guesses");
        assert_eq!(guess_noun(1), "guess");
        assert_eq!(guess_noun(2), "guesses");
    }

    #[test]
    fn word_list_truncates() {
        let words: Vec<Word> = ["crane", "slate", "plate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        assert_eq!(word_list(&words, 5), "CRANE, SLATE, PLATE");
        assert_eq!(word_list(&words, 2), "CRANE, SLATE, ... (+1 more)");
    }

    #[test]
    fn tiles_contain_every_letter() {
        let guess = Word::new("crane").unwrap();
        let tiles = feedback_tiles(&guess, &Feedback::PERFECT);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(tiles.contains(letter));
        }
    }
}
