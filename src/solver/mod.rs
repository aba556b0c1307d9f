//! Letter-frequency solving engine
//!
//! Probability model, word scoring, constraint filtering and the round
//! controller that ties them together.

mod constraints;
mod engine;
mod error;
mod frequency;
mod scorer;

pub use constraints::{Constraints, Placement};
pub use engine::{AnswerOracle, FeedbackSource, RoundState, Solver, Turn};
pub use error::SolverError;
pub use frequency::{LetterCounts, Probabilities};
pub use scorer::{REPEAT_WEIGHT, Ranking, ScoredWord, score_word};
