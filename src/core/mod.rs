//! Core domain types for the solver
//!
//! Plain value types with no I/O: validated words and per-letter feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LENGTH, Word, WordError, letter_index};
