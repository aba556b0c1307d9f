//! Word scoring and candidate ranking
//!
//! A word scores the sum of its letters' probabilities. The first occurrence
//! of a letter counts in full, every repeat counts at `REPEAT_WEIGHT`.

use super::Probabilities;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Weight of a letter already seen earlier in the same word
pub const REPEAT_WEIGHT: f64 = 0.5;

/// Score a single word against the probability model
///
/// # Examples
/// ```
/// use wordle_freq::core::Word;
/// use wordle_freq::solver::{Probabilities, score_word};
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("sheet").unwrap()];
/// let probabilities = Probabilities::from_words(&words).unwrap();
///
/// // The second E in SHEET only counts half
/// let e = probabilities.get(b'e');
/// let sheet = score_word(&words[1], &probabilities);
/// let expected = probabilities.get(b's') + probabilities.get(b'h') + e + e * 0.5
///     + probabilities.get(b't');
/// assert!((sheet - expected).abs() < 1e-12);
/// ```
#[must_use]
pub fn score_word(word: &Word, probabilities: &Probabilities) -> f64 {
    let mut seen = FxHashSet::default();
    let mut score = 0.0;

    for &letter in word.chars() {
        let weight = if seen.insert(letter) { 1.0 } else { REPEAT_WEIGHT };
        score += probabilities.get(letter) * weight;
    }

    score
}

/// A candidate paired with its score for the current round
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

impl ScoredWord {
    /// Ascending by score, then by word text so ties are deterministic
    fn ascending(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Every candidate scored and sorted ascending; the best guess is last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<ScoredWord>,
}

impl Ranking {
    /// Score every candidate and sort ascending
    #[must_use]
    pub fn rank(candidates: &[Word], probabilities: &Probabilities) -> Self {
        let mut entries: Vec<ScoredWord> = candidates
            .par_iter()
            .map(|word| ScoredWord {
                word: word.clone(),
                score: score_word(word, probabilities),
            })
            .collect();

        entries.sort_by(ScoredWord::ascending);

        Self { entries }
    }

    /// The recommended guess: the highest-scoring entry
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.entries.last()
    }

    /// The `n` highest-scoring entries, still in ascending order
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredWord] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// 1-based rank of `word`, counting from the best entry
    #[must_use]
    pub fn position_of(&self, word: &Word) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .position(|entry| &entry.word == word)
            .map(|i| i + 1)
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
