//! Round controller
//!
//! `Solver` owns everything that changes between rounds: the candidate set,
//! the constraint state and the round state machine. The probability model is
//! built once from the baseline dictionary and reused every round.

use super::{Constraints, Probabilities, Ranking, SolverError};
use crate::core::{Feedback, Word};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

/// Supplies feedback for the guess chosen each round
///
/// This is the boundary to whatever asks the player (a terminal prompt, a TUI,
/// or a simulated game with a known answer). The call may block.
pub trait FeedbackSource {
    /// Return the feedback for `guess`, the top entry of `ranking`
    ///
    /// # Errors
    /// Implementations report I/O failures, malformed input they will not
    /// retry, or [`SolverError::Aborted`] when the player stops.
    fn feedback(
        &mut self,
        round: usize,
        guess: &Word,
        ranking: &Ranking,
    ) -> Result<Feedback, SolverError>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(usize, &Word, &Ranking) -> Result<Feedback, SolverError>,
{
    fn feedback(
        &mut self,
        round: usize,
        guess: &Word,
        ranking: &Ranking,
    ) -> Result<Feedback, SolverError> {
        self(round, guess, ranking)
    }
}

/// Plays against a known answer, scoring each guess with the game's rules
#[derive(Debug, Clone)]
pub struct AnswerOracle {
    answer: Word,
}

impl AnswerOracle {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for AnswerOracle {
    fn feedback(
        &mut self,
        _round: usize,
        guess: &Word,
        _ranking: &Ranking,
    ) -> Result<Feedback, SolverError> {
        Ok(Feedback::between(guess, &self.answer))
    }
}

/// Where the round loop stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting to play the given 1-based round
    Active(usize),
    /// All-correct feedback received on the given round
    Solved { rounds: usize },
    /// No candidate is consistent with the feedback so far
    ExhaustedCandidates,
    /// The driver's round limit was reached first
    ExhaustedRounds,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active(_))
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Letter-frequency solver for a single game
#[derive(Debug, Clone)]
pub struct Solver {
    probabilities: Probabilities,
    dictionary_size: usize,
    candidates: Vec<Word>,
    constraints: Constraints,
    history: Vec<Turn>,
    state: RoundState,
}

impl Solver {
    /// Create a solver over a baseline dictionary
    ///
    /// Duplicate words are dropped, keeping the first occurrence. The
    /// dictionary seeds both the probability model and the candidate set.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if `baseline` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::{Feedback, Word};
    /// use wordle_freq::solver::{RoundState, Solver};
    /// use wordle_freq::wordlists::loader::words_from_slice;
    ///
    /// let mut solver = Solver::new(words_from_slice(&["crane", "moldy", "built"])).unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let state = solver.submit(guess, &Feedback::parse("XXXXX").unwrap());
    ///
    /// assert_eq!(state, RoundState::Active(2));
    /// assert_eq!(solver.candidates().len(), 2);
    /// ```
    pub fn new(baseline: Vec<Word>) -> Result<Self, SolverError> {
        let mut seen = FxHashSet::default();
        let candidates: Vec<Word> = baseline
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        let probabilities = Probabilities::from_words(&candidates)?;
        info!(
            "letter probabilities built from {} dictionary words",
            candidates.len()
        );

        Ok(Self {
            probabilities,
            dictionary_size: candidates.len(),
            candidates,
            constraints: Constraints::new(),
            history: Vec::new(),
            state: RoundState::Active(1),
        })
    }

    /// Score and sort the current candidates, best last
    #[must_use]
    pub fn rank(&self) -> Ranking {
        Ranking::rank(&self.candidates, &self.probabilities)
    }

    /// Check for an exhausted candidate set before playing a round
    pub fn begin_round(&mut self) -> RoundState {
        if matches!(self.state, RoundState::Active(_)) && self.candidates.is_empty() {
            warn!("no candidates left after {} rounds", self.history.len());
            self.state = RoundState::ExhaustedCandidates;
        }
        self.state
    }

    /// Apply the feedback for `guess` and move to the next state
    ///
    /// All-correct feedback solves the game without touching the candidate
    /// set. Anything else is recorded into the constraint state, which then
    /// prunes the candidates. Terminal states are left unchanged.
    pub fn submit(&mut self, guess: Word, feedback: &Feedback) -> RoundState {
        let RoundState::Active(round) = self.state else {
            return self.state;
        };

        let candidates_before = self.candidates.len();

        if feedback.is_solved() {
            debug!("round {round}: {guess} solved the puzzle");
            self.history.push(Turn {
                guess,
                feedback: *feedback,
                candidates_before,
                candidates_after: candidates_before,
            });
            self.state = RoundState::Solved { rounds: round };
            return self.state;
        }

        self.constraints.record(&guess, feedback);
        self.constraints.filter(&mut self.candidates);
        let candidates_after = self.candidates.len();

        debug!(
            "round {round}: {guess} {feedback} narrowed {candidates_before} -> {candidates_after} candidates"
        );

        self.history.push(Turn {
            guess,
            feedback: *feedback,
            candidates_before,
            candidates_after,
        });
        self.state = RoundState::Active(round + 1);
        self.state
    }

    /// Play one round: rank, ask `source` about the best word, apply its answer
    ///
    /// # Errors
    /// Propagates any error from `source`; the solver state is unchanged in
    /// that case.
    pub fn advance<S: FeedbackSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<RoundState, SolverError> {
        let RoundState::Active(round) = self.begin_round() else {
            return Ok(self.state);
        };

        let ranking = self.rank();
        let Some(guess) = ranking.best().map(|entry| entry.word.clone()) else {
            self.state = RoundState::ExhaustedCandidates;
            return Ok(self.state);
        };

        let feedback = source.feedback(round, &guess, &ranking)?;
        Ok(self.submit(guess, &feedback))
    }

    /// Play rounds until the game ends or `max_rounds` have been played
    ///
    /// # Errors
    /// Propagates the first error from `source`.
    pub fn run<S: FeedbackSource + ?Sized>(
        &mut self,
        source: &mut S,
        max_rounds: usize,
    ) -> Result<RoundState, SolverError> {
        loop {
            if self.enforce_round_limit(max_rounds).is_terminal() {
                return Ok(self.state);
            }
            self.advance(source)?;
        }
    }

    /// End the game once more than `max_rounds` rounds would be needed
    pub fn enforce_round_limit(&mut self, max_rounds: usize) -> RoundState {
        if let RoundState::Active(round) = self.state
            && round > max_rounds
        {
            debug!("round limit of {max_rounds} reached");
            self.state = RoundState::ExhaustedRounds;
        }
        self.state
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    /// Number of distinct words in the baseline dictionary
    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }
}
