//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::score_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SOLVER - Letter Frequency")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Current guess info
            Constraint::Min(6),         // Ranking
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_ranking(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = if let Some(best) = app.suggestion() {
        vec![
            Line::from(vec![
                Span::raw("Next guess: "),
                Span::styled(
                    best.word.text().to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Score:   {:.4}", best.score)),
            Line::from(format!(
                "Round:   {} of {}",
                app.solver.history().len() + 1,
                app.config.max_rounds
            )),
        ]
    } else {
        vec![Line::from("No suggestion available")]
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let best = app.suggestion().map_or(0.0, |entry| entry.score);

    let items: Vec<ListItem> = app
        .ranking
        .top(app.config.top_n)
        .iter()
        .rev()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. {:<5} ", i + 1, entry.word.text()), style),
                Span::styled(
                    score_bar(entry.score, best, 16),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {:.4}", entry.score),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let ranking = List::new(items).block(
        Block::default()
            .title(format!(" Top {} of {} ", app.config.top_n, app.ranking.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(ranking, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.solver.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, turn)| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                i + 1,
                turn.guess.text().to_uppercase(),
                turn.feedback.to_emoji(),
                turn.candidates_before,
                turn.candidates_after
            ))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Length(6), // Constraints
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.dictionary_size();
    let remaining = app.solver.candidates().len();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = if total == 0 {
        0
    } else {
        (eliminated * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.solver.constraints();

    let excluded: String = constraints
        .excluded()
        .into_iter()
        .map(|letter| char::from(letter.to_ascii_uppercase()))
        .collect();
    let misplaced = constraints
        .misplaced()
        .iter()
        .map(|p| format!("{}≠{}", char::from(p.letter.to_ascii_uppercase()), p.position + 1))
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(vec![
            Span::raw("Known:     "),
            Span::styled(
                constraints.known_pattern(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Misplaced: "),
            Span::styled(misplaced, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Excluded:  "),
            Span::styled(excluded, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => (" Game over | 'n' new game, 'u' undo, 'q' quit ", Color::Green),
        InputMode::Feedback => (
            " Enter Feedback (X = not present, Y = present, G = exactly) ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Games: {} | Won: {} | q: Quit | n: New Game | u: Undo | Enter: Submit",
        app.stats.total_games, app.stats.games_won
    );

    let help = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
