//! Ranking inspection
//!
//! Shows the opening ranking of the dictionary and where particular words
//! stand in it.

use crate::core::Word;
use crate::solver::{ScoredWord, Solver, SolverError, score_word};

/// Score and position of a word the user asked about
#[derive(Debug, Clone, PartialEq)]
pub struct WordLookup {
    pub word: Word,
    pub score: f64,
    /// 1-based rank among current candidates, `None` if not a candidate
    pub rank: Option<usize>,
}

/// Top of the ranking plus any requested lookups
#[derive(Debug, Clone)]
pub struct RankReport {
    pub total_candidates: usize,
    /// Highest-scoring entries, best first
    pub top: Vec<ScoredWord>,
    pub lookups: Vec<WordLookup>,
}

/// Rank the solver's candidates and look up `words` in the ranking
///
/// Words outside the dictionary still get a score.
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` for any entry that is not a 5-letter word.
pub fn rank_words(
    solver: &Solver,
    words: &[String],
    top_n: usize,
) -> Result<RankReport, SolverError> {
    let ranking = solver.rank();

    let lookups = words
        .iter()
        .map(|text| -> Result<WordLookup, SolverError> {
            let word = Word::new(text.as_str())?;
            Ok(WordLookup {
                score: score_word(&word, solver.probabilities()),
                rank: ranking.position_of(&word),
                word,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RankReport {
        total_candidates: ranking.len(),
        top: ranking.top(top_n).iter().rev().cloned().collect(),
        lookups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_solver() -> Solver {
        Solver::new(words_from_slice(&[
            "crane", "slate", "hello", "world", "stare", "sheet", "share",
        ]))
        .unwrap()
    }

    #[test]
    fn top_is_best_first() {
        let solver = setup_solver();
        let report = rank_words(&solver, &[], 3).unwrap();

        assert_eq!(report.total_candidates, 7);
        assert_eq!(report.top.len(), 3);
        assert!(report.top.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(Some(&report.top[0]), solver.rank().best());
    }

    #[test]
    fn lookups_report_rank_and_score() {
        let solver = setup_solver();
        let report =
            rank_words(&solver, &["SHEET".to_string(), "fuzzy".to_string()], 10).unwrap();

        let sheet = &report.lookups[0];
        assert_eq!(sheet.word.text(), "sheet");
        assert!(sheet.rank.is_some());
        assert!(sheet.score > 0.0);

        // Not in the dictionary: scored, but unranked
        let fuzzy = &report.lookups[1];
        assert_eq!(fuzzy.rank, None);
        assert!(fuzzy.score.abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_lookup_is_an_error() {
        let solver = setup_solver();
        let result = rank_words(&solver, &["abc".to_string()], 10);
        assert!(matches!(result, Err(SolverError::InvalidWord(_))));
    }
}
