//! Wordle Freq
//!
//! An interactive Wordle solver that ranks candidates by letter frequency and
//! prunes them with the feedback from each round.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_freq::core::{Feedback, Word};
//! use wordle_freq::solver::{RoundState, Solver};
//! use wordle_freq::wordlists::loader::parse_dictionary;
//!
//! let mut solver = Solver::new(parse_dictionary("crane\nslate\nmoldy\n")).unwrap();
//! let guess = solver.rank().best().unwrap().word.clone();
//!
//! let state = solver.submit(guess, &Feedback::parse("XXXXX").unwrap());
//! assert_eq!(state, RoundState::Active(2));
//! ```

// Core domain types
pub mod core;

// Scoring, filtering and the round controller
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
