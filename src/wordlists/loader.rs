//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse word list text, one word per line
///
/// Blank lines and `#` comments are ignored; entries that are not valid
/// five-letter words are skipped.
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, kept = words.len(), "skipped invalid word list entries");
    }

    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_greedy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let dictionary = Dictionary::new(load_from_file(path)?);
    debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// The dictionary compiled into the binary
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::from_strs(super::WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_skips_invalid() {
        let words = words_from_text("crane\ntoolong\n\n  SLATE  \n# comment\nab1de\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("definitely/not/a/real/file.txt").is_err());
    }

    #[test]
    fn load_dictionary_from_temp_file() {
        let path = std::env::temp_dir().join(format!("wordle_greedy_{}.txt", std::process::id()));
        fs::write(&path, "table\napple\ntable\n").unwrap();

        let dictionary = load_dictionary(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_str("apple"));
    }

    #[test]
    fn embedded_dictionary_is_populated() {
        let dictionary = embedded_dictionary();
        assert_eq!(dictionary.len(), super::super::WORDS_COUNT);
    }
}
