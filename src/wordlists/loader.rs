//! Word list loading utilities
//!
//! A source line becomes a word only if, after dropping its line ending, it
//! does not start with an uppercase letter (proper nouns in many system word
//! lists) and is a valid 5-letter word. Words are lowercased and duplicates
//! keep their first position.

use crate::core::Word;
use crate::solver::SolverError;
use log::info;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the baseline dictionary from a file
///
/// A leading `~/` is expanded against `$HOME`.
///
/// # Errors
///
/// Returns `SolverError::SourceUnavailable` if the file cannot be read.
/// An empty result is not an error here; the solver rejects it.
///
/// # Examples
/// ```no_run
/// use wordle_freq::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SolverError> {
    let path = expand_home(path.as_ref());
    let bytes = fs::read(&path).map_err(|source| SolverError::SourceUnavailable {
        path: path.clone(),
        source,
    })?;

    let words = parse_dictionary(&String::from_utf8_lossy(&bytes));
    info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Parse dictionary text, one candidate per line
///
/// # Examples
/// ```
/// use wordle_freq::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("crane\r\nParis\nCRANE\nslate\nabc\nslate\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .filter(|line| !line.starts_with(|c: char| c.is_ascii_uppercase()))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_freq::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(texts(&words), vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn parse_skips_capitalized_entries() {
        let words = parse_dictionary("Paris\nHELLO\nhello\nwoRLD\n");
        assert_eq!(texts(&words), vec!["hello", "world"]);
    }

    #[test]
    fn parse_keeps_only_five_letter_words() {
        let words = parse_dictionary("a\nabout\nabove\nabsolute\n\nhi\n");
        assert_eq!(texts(&words), vec!["about", "above"]);
    }

    #[test]
    fn parse_strips_crlf_and_dedupes() {
        let words = parse_dictionary("crane\r\nslate\r\ncrane\r\n");
        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn parse_drops_non_letter_entries() {
        let words = parse_dictionary("o'ney\nab-cd\nab cd\nmoldy\n");
        assert_eq!(texts(&words), vec!["moldy"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_freq_{}.txt", std::process::id()));
        fs::write(&path, "crane\nSlate\nslate\nhello\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), vec!["crane", "slate", "hello"]);
    }

    #[test]
    fn load_from_missing_file_is_source_unavailable() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(
            result,
            Err(SolverError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        let path = Path::new("/usr/share/dict/words");
        assert_eq!(expand_home(path), path.to_path_buf());
    }
}
