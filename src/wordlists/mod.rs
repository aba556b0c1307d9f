//! Dictionary loading
//!
//! Turns a plain word-per-line file into the baseline word list.

pub mod loader;

/// Dictionary used when none is given on the command line
pub const DEFAULT_DICTIONARY: &str = "~/words_alpha.txt";
