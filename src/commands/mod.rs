//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use rank::{RankReport, WordLookup, rank_words};
pub use simple::{TerminalPrompt, play_session, run_simple};
pub use solve::{GuessStep, SolveResult, solve_word};

/// Numeric knobs shared by the game-playing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds allowed before the game counts as lost
    pub max_rounds: usize,
    /// How many top-ranked candidates to show each round
    pub top_n: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        Self {
            max_rounds,
            top_n: 10,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}
