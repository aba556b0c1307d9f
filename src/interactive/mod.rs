//! Interactive TUI mode
//!
//! Full-screen front end over the same round controller as the line mode.

mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
