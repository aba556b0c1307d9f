//! TUI application state and logic

use crate::commands::GameConfig;
use crate::core::Feedback;
use crate::output::formatters::guesses;
use crate::solver::{Ranking, RoundState, ScoredWord, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    initial: Solver,
    pub solver: Solver,
    pub config: GameConfig,
    pub ranking: Ranking,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    undo_stack: Vec<(Solver, Statistics)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(solver: Solver, config: GameConfig) -> Self {
        let mut app = Self {
            initial: solver.clone(),
            solver,
            config,
            ranking: Ranking::default(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            undo_stack: Vec::new(),
        };
        app.add_message(
            "Welcome! Guesses are ranked by letter frequency.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback: X = not present, Y = present, G = exactly (e.g. XXYGX)",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// The word the solver recommends this round
    #[must_use]
    pub fn suggestion(&self) -> Option<&ScoredWord> {
        self.ranking.best()
    }

    /// Where the current game stands
    #[must_use]
    pub const fn outcome(&self) -> RoundState {
        self.solver.state()
    }

    /// Recompute the ranking and input mode from the solver's state
    fn refresh(&mut self) -> RoundState {
        self.solver.enforce_round_limit(self.config.max_rounds);
        let state = self.solver.begin_round();

        if let RoundState::Active(_) = state {
            self.ranking = self.solver.rank();
            self.input_mode = InputMode::Feedback;
        } else {
            self.ranking = Ranking::default();
            self.input_mode = InputMode::GameOver;
        }

        state
    }

    pub fn handle_feedback(&mut self, input: &str) {
        if self.input_mode == InputMode::GameOver {
            return;
        }

        let feedback = match Feedback::parse(input.trim()) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.add_message(&format!("Invalid feedback: {err}"), MessageStyle::Error);
                return;
            }
        };

        let Some(guess) = self.suggestion().map(|entry| entry.word.clone()) else {
            self.add_message("No suggestion to give feedback on!", MessageStyle::Error);
            return;
        };

        self.undo_stack
            .push((self.solver.clone(), self.stats.clone()));
        self.solver.submit(guess, &feedback);
        self.input_buffer.clear();

        match self.refresh() {
            RoundState::Solved { rounds } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.add_message(
                    &format!("Huzzah! Solved in {}.", guesses(rounds)),
                    MessageStyle::Success,
                );
                self.add_message("'n' plays again, 'q' leaves.", MessageStyle::Info);
            }
            RoundState::ExhaustedCandidates => {
                self.stats.total_games += 1;
                self.add_message(
                    "No words left - feedback may be inconsistent. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            RoundState::ExhaustedRounds => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!(
                        "Out of rounds with {} candidates left. Press 'u' to undo.",
                        self.solver.candidates().len()
                    ),
                    MessageStyle::Error,
                );
            }
            RoundState::Active(_) => {
                self.add_message(
                    &format!("{} candidates remaining", self.solver.candidates().len()),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.solver = self.initial.clone();
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh();
    }

    pub fn undo_last(&mut self) {
        if let Some((solver, stats)) = self.undo_stack.pop() {
            self.solver = solver;
            self.stats = stats;
            self.refresh();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application, returning the state the last game was left in
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<RoundState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<RoundState> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char('u') => app.undo_last(),
                KeyCode::Char(c) if app.input_mode == InputMode::Feedback => {
                    if app.input_buffer.chars().count() < 5 {
                        app.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = app.input_buffer.clone();
                    app.handle_feedback(&input);
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(app.outcome());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_app() -> App {
        let solver = Solver::new(words_from_slice(&[
            "crane", "slate", "irate", "share", "flare", "moldy", "built",
        ]))
        .unwrap();
        App::new(solver, GameConfig::default())
    }

    #[test]
    fn starts_with_a_suggestion() {
        let app = setup_app();
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.ranking.len(), 7);
        assert!(app.suggestion().is_some());
    }

    #[test]
    fn invalid_feedback_keeps_state() {
        let mut app = setup_app();
        app.handle_feedback("XYZ");

        assert!(app.solver.history().is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn solved_feedback_ends_game() {
        let mut app = setup_app();
        app.handle_feedback("GGGGG");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.suggestion().is_none());
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut app = setup_app();
        let first = app.suggestion().unwrap().word.clone();

        app.handle_feedback("XXXXX");
        assert_eq!(app.solver.history().len(), 1);

        app.undo_last();
        assert!(app.solver.history().is_empty());
        assert_eq!(app.suggestion().unwrap().word, first);
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn outcome_follows_the_game() {
        let mut app = setup_app();
        assert_eq!(app.outcome(), RoundState::Active(1));

        app.handle_feedback("GGGGG");
        assert_eq!(app.outcome(), RoundState::Solved { rounds: 1 });

        app.new_game();
        app.handle_feedback("XXXXX");
        assert_eq!(app.outcome(), RoundState::ExhaustedCandidates);
    }

    #[test]
    fn undo_restores_statistics() {
        let mut app = setup_app();
        app.handle_feedback("GGGGG");
        assert_eq!(app.stats.games_won, 1);

        app.undo_last();
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(app.stats.games_won, 0);

        app.handle_feedback("GGGGG");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn exhausted_candidates_end_game() {
        let mut app = setup_app();
        // All-absent feedback eventually rules out every word
        app.handle_feedback("XXXXX");
        app.handle_feedback("XXXXX");
        app.handle_feedback("XXXXX");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_resets_solver() {
        let mut app = setup_app();
        app.handle_feedback("GGGGG");
        app.new_game();

        assert!(app.solver.history().is_empty());
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.solver.candidates().len(), 7);
    }
}
