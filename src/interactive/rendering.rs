//! TUI rendering with ratatui
//!
//! Board, keyboard, challenge and message panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{AttemptRow, LetterCell, LetterState};
use crate::game::{AttemptStore, GameStatus, KEYBOARD_LAYOUT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Challenge, share and messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Colours for a tile in a given state
fn tile_style(state: LetterState) -> Style {
    let (fg, bg) = match state {
        LetterState::Exact => (Color::Black, Color::Green),
        LetterState::Partial => (Color::Black, Color::Yellow),
        LetterState::Wrong => (Color::White, Color::DarkGray),
        LetterState::Key => (Color::White, Color::Reset),
        LetterState::Blank | LetterState::Disabled => (Color::DarkGray, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(cell: LetterCell) -> Span<'static> {
    let text = match cell.state {
        LetterState::Blank | LetterState::Disabled => " · ".to_string(),
        _ => format!(" {} ", cell.letter.to_ascii_uppercase()),
    };
    Span::styled(text, tile_style(cell.state))
}

fn row_line(row: &AttemptRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for &cell in row.cells() {
        spans.push(tile(cell));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_header<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let game = &app.game;
    let score = match game.status() {
        GameStatus::Ended { success: false } => "X".to_string(),
        _ => game.attempts().len().to_string(),
    };
    let title = format!(
        "🟩 YAWDLE  |  puzzle {}  |  {}/{}",
        game.seed(),
        score,
        game.attempts_limit()
    );

    let header = Paragraph::new(title)
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

fn render_game_panel<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board_height = u16::try_from(app.game.attempts_limit()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let lines: Vec<Line> = app.game.board().iter().map(row_line).collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| tile(LetterCell::new(c, app.keyboard.state_of(c))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Challenge or share
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    if app.share.is_some() {
        render_share(f, app, chunks[0]);
    } else {
        render_challenge(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_challenge<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let content: Vec<Line> = match &app.challenge {
        None => vec![Line::from(Span::styled(
            "No challenge received",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(challenge) => match challenge.revealed() {
            Some(revealed) => {
                let mut lines = vec![Line::from(vec![
                    Span::raw("Solution: "),
                    Span::styled(
                        revealed.solution.to_uppercase(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])];
                lines.extend(revealed.rows.iter().map(row_line));
                lines
            }
            None => {
                let mut lines = vec![Line::from("Locked. Ctrl-R to reveal.")];
                if let Some(summary) = challenge.summary() {
                    lines.extend(summary.to_emoji().lines().map(|l| Line::from(l.to_string())));
                }
                lines
            }
        },
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Challenge ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_share<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let text = app
        .share
        .as_ref()
        .map(|message| format!("{}\n\n{}", message.body, message.url))
        .unwrap_or_default();

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Share (printed on exit) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_input<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Reveal => (
            " Enter the solution to reveal | ESC to cancel ",
            app.reveal_buffer.to_uppercase(),
            Color::Cyan,
        ),
        InputMode::Playing if app.game.is_ended() => (
            " Game over | Ctrl-S share, Ctrl-N new puzzle ",
            String::new(),
            Color::Green,
        ),
        InputMode::Playing => (
            " Type your guess | Enter to submit ",
            app.game.draft().to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status<S: AttemptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New | Ctrl-S: Share | Ctrl-R: Reveal")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
