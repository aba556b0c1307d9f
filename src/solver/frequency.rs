//! Letter frequency table and probability model
//!
//! Both are built once from the baseline dictionary and never from the
//! shrinking candidate set.

use super::SolverError;
use crate::core::{Word, letter_index};

/// Occurrence count of each letter `a..=z` across a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u64; 26],
}

impl LetterCounts {
    /// Count every letter at every position of every word
    ///
    /// The counts always sum to `5 × words.len()`.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [0u64; 26];
        for word in words {
            for &letter in word.chars() {
                counts[letter_index(letter)] += 1;
            }
        }
        Self { counts }
    }

    /// Count for a single lowercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`.
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u64 {
        self.counts[letter_index(letter)]
    }

    /// Total letter occurrences
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Per-letter probability, `count / total`
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities {
    table: [f64; 26],
}

impl Probabilities {
    /// Normalise a frequency table
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` when the table is empty, since
    /// there is nothing to divide by.
    pub fn from_counts(counts: &LetterCounts) -> Result<Self, SolverError> {
        let total = counts.total();
        if total == 0 {
            return Err(SolverError::EmptyDictionary);
        }

        let total = total as f64;
        let mut table = [0.0; 26];
        for (p, &count) in table.iter_mut().zip(counts.counts.iter()) {
            *p = count as f64 / total;
        }

        Ok(Self { table })
    }

    /// Build the probability model straight from a word list
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::Word;
    /// use wordle_freq::solver::Probabilities;
    ///
    /// let words = vec![Word::new("aaaab").unwrap()];
    /// let probabilities = Probabilities::from_words(&words).unwrap();
    /// assert!((probabilities.get(b'a') - 0.8).abs() < 1e-12);
    /// assert!((probabilities.get(b'b') - 0.2).abs() < 1e-12);
    /// assert_eq!(probabilities.get(b'z'), 0.0);
    /// ```
    pub fn from_words(words: &[Word]) -> Result<Self, SolverError> {
        Self::from_counts(&LetterCounts::from_words(words))
    }

    /// Probability of a single lowercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`.
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> f64 {
        self.table[letter_index(letter)]
    }

    /// Iterate `(letter, probability)` over `a..=z`
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (b'a'..=b'z').zip(self.table.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn counts_sum_to_five_per_word() {
        let words = words_from_slice(&["crane", "slate", "hello", "world", "stare"]);
        let counts = LetterCounts::from_words(&words);

        assert_eq!(counts.total(), 25);
        assert_eq!(counts.count(b'l'), 4);
        assert_eq!(counts.count(b'e'), 4);
        assert_eq!(counts.count(b'z'), 0);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let words = words_from_slice(&["crane", "slate", "hello", "world", "stare", "fuzzy"]);
        let probabilities = Probabilities::from_words(&words).unwrap();

        let sum: f64 = probabilities.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(probabilities.iter().all(|(_, p)| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn probabilities_match_counts() {
        let words = words_from_slice(&["hello", "world"]);
        let probabilities = Probabilities::from_words(&words).unwrap();

        // l appears 3 times, o twice, out of 10 letters
        assert!((probabilities.get(b'l') - 0.3).abs() < 1e-12);
        assert!((probabilities.get(b'o') - 0.2).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn get_rejects_uppercase_letter() {
        let probabilities = Probabilities::from_words(&words_from_slice(&["crane"])).unwrap();
        let _ = probabilities.get(b'A');
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert!(matches!(
            Probabilities::from_words(&[]),
            Err(SolverError::EmptyDictionary)
        ));
    }

    #[test]
    fn iter_covers_alphabet() {
        let words = words_from_slice(&["crane"]);
        let probabilities = Probabilities::from_words(&words).unwrap();
        let letters: Vec<u8> = probabilities.iter().map(|(letter, _)| letter).collect();

        assert_eq!(letters.len(), 26);
        assert_eq!(letters.first(), Some(&b'a'));
        assert_eq!(letters.last(), Some(&b'z'));
    }
}
