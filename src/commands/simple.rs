//! Line-based interactive mode
//!
//! Shows the ranking each round, suggests the best word and reads one line of
//! feedback.

use super::GameConfig;
use crate::core::{Feedback, Word};
use crate::solver::{FeedbackSource, Ranking, RoundState, Solver, SolverError};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompts for feedback over any line reader and writer
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    top_n: usize,
    lenient: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Create a prompt that shows `top_n` candidates per round
    ///
    /// With `lenient` set, any line is accepted and unrecognised symbols are
    /// simply not recorded. Otherwise malformed feedback is rejected and the
    /// player is asked again.
    pub const fn new(input: R, output: W, top_n: usize, lenient: bool) -> Self {
        Self {
            input,
            output,
            top_n,
            lenient,
        }
    }

    fn show_round(&mut self, round: usize, guess: &Word, ranking: &Ranking) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} candidates remaining",
            ranking.len().to_string().bright_cyan()
        )?;
        for entry in ranking.top(self.top_n) {
            writeln!(self.output, "  {}  {:.4}", entry.word, entry.score)?;
        }
        writeln!(
            self.output,
            "Next guess ({round}): {}",
            guess.text().to_uppercase().bright_yellow().bold()
        )?;
        writeln!(
            self.output,
            "Corrections: X = Not present, Y = Present, G = Exactly, ie XXYGX"
        )
    }

    fn read_line(&mut self) -> Result<String, SolverError> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SolverError::Aborted);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> FeedbackSource for TerminalPrompt<R, W> {
    fn feedback(
        &mut self,
        round: usize,
        guess: &Word,
        ranking: &Ranking,
    ) -> Result<Feedback, SolverError> {
        self.show_round(round, guess, ranking)?;

        loop {
            let line = self.read_line()?;

            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                return Err(SolverError::Aborted);
            }

            if self.lenient {
                return Ok(Feedback::parse_lenient(&line));
            }

            match Feedback::parse(&line) {
                Ok(feedback) => return Ok(feedback),
                Err(err) => writeln!(self.output, "{} {err}", "Invalid feedback:".red())?,
            }
        }
    }
}

/// Play one game over the given reader and writer
///
/// # Errors
///
/// Returns an error on I/O failure or when the input ends or the player quits
/// before the game is decided.
pub fn play_session<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: R,
    output: W,
    config: GameConfig,
    lenient: bool,
) -> Result<RoundState, SolverError> {
    let mut prompt = TerminalPrompt::new(input, output, config.top_n, lenient);
    solver.run(&mut prompt, config.max_rounds)
}

/// Run the interactive solver on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input or the
/// player quits.
pub fn run_simple(
    solver: &mut Solver,
    config: GameConfig,
    lenient: bool,
) -> Result<RoundState, SolverError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Solver - Letter Frequency Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Initializing dictionary with {} words",
        solver.dictionary_size()
    );
    println!("Type 'quit' to stop.");

    let stdin = io::stdin();
    play_session(solver, stdin.lock(), io::stdout(), config, lenient)
}
