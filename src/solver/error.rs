//! Solver error taxonomy

use crate::core::{FeedbackError, WordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine and its collaborators
///
/// Running out of candidates is not an error: it is reported as
/// [`RoundState::ExhaustedCandidates`](super::RoundState::ExhaustedCandidates).
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("dictionary is empty: no 5-letter words to build letter frequencies from")]
    EmptyDictionary,

    #[error("cannot read dictionary {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the game finished")]
    Aborted,
}
