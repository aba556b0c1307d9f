//! Word solving command
//!
//! Plays a whole game against a known answer and records every round.

use super::GameConfig;
use crate::core::{Feedback, Word};
use crate::solver::{AnswerOracle, FeedbackSource, Ranking, RoundState, Solver, SolverError};
use log::warn;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub outcome: RoundState,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.outcome, RoundState::Solved { .. })
    }
}

/// A single round of the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Oracle that also remembers the score of every guess it was shown
struct ScoreRecorder {
    oracle: AnswerOracle,
    scores: Vec<f64>,
}

impl FeedbackSource for ScoreRecorder {
    fn feedback(
        &mut self,
        round: usize,
        guess: &Word,
        ranking: &Ranking,
    ) -> Result<Feedback, SolverError> {
        self.scores
            .push(ranking.best().map_or(0.0, |entry| entry.score));
        self.oracle.feedback(round, guess, ranking)
    }
}

/// Solve `target` starting from a fresh copy of `solver`
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if the target is not a 5-letter word.
///
/// # Examples
/// ```
/// use wordle_freq::commands::{GameConfig, solve_word};
/// use wordle_freq::solver::Solver;
/// use wordle_freq::wordlists::loader::words_from_slice;
///
/// let solver = Solver::new(words_from_slice(&["crane", "moldy", "built"])).unwrap();
/// let result = solve_word("moldy", &solver, GameConfig::default()).unwrap();
/// assert!(result.success());
/// ```
pub fn solve_word(
    target: &str,
    solver: &Solver,
    config: GameConfig,
) -> Result<SolveResult, SolverError> {
    let mut recorder = ScoreRecorder {
        oracle: AnswerOracle::new(Word::new(target)?),
        scores: Vec::new(),
    };
    let answer = recorder.oracle.answer();
    if !solver.candidates().contains(answer) {
        warn!("{answer} is not a candidate; the solver cannot guess it");
    }
    let target = answer.text().to_string();

    let mut game = solver.clone();
    let outcome = game.run(&mut recorder, config.max_rounds)?;

    let steps = game
        .history()
        .iter()
        .zip(recorder.scores)
        .map(|(turn, score)| GuessStep {
            word: turn.guess.text().to_string(),
            feedback: turn.feedback,
            score,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        target,
        outcome,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_solver() -> Solver {
        Solver::new(words_from_slice(&[
            "crane", "slate", "irate", "share", "flare", "moldy", "built",
        ]))
        .unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let solver = setup_solver();
        let result = solve_word("built", &solver, GameConfig::default()).unwrap();

        assert!(result.success());
        assert_eq!(result.target, "built");
        assert_eq!(result.steps.last().unwrap().word, "built");
        assert!(result.steps.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_normalises_target_case() {
        let solver = setup_solver();
        let result = solve_word("BuIlT", &solver, GameConfig::default()).unwrap();

        assert!(result.success());
        assert_eq!(result.target, "built");
    }

    #[test]
    fn solve_records_history() {
        let solver = setup_solver();
        let result = solve_word("moldy", &solver, GameConfig::default()).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.score > 0.0);
        }
    }

    #[test]
    fn solve_leaves_original_solver_untouched() {
        let solver = setup_solver();
        solve_word("share", &solver, GameConfig::default()).unwrap();

        assert_eq!(solver.candidates().len(), 7);
        assert!(solver.history().is_empty());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let solver = setup_solver();
        let result = solve_word("toolong", &solver, GameConfig::default());

        assert!(matches!(result, Err(SolverError::InvalidWord(_))));
    }

    #[test]
    fn solve_unknown_target_exhausts_candidates() {
        let solver = setup_solver();
        let result = solve_word("zzzzz", &solver, GameConfig::default()).unwrap();

        assert!(!result.success());
        assert_eq!(result.outcome, RoundState::ExhaustedCandidates);
    }

    #[test]
    fn solve_with_max_rounds_limit() {
        let solver = setup_solver();
        let result = solve_word("moldy", &solver, GameConfig::new(1)).unwrap();

        assert!(result.steps.len() <= 1);
        if !result.success() {
            assert_eq!(result.outcome, RoundState::ExhaustedRounds);
        }
    }
}
