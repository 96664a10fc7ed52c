//! TUI application state and logic

use crate::challenge::{Challenge, ShareMessage};
use crate::game::{
    AttemptStore, Game, GameEvent, GameStatus, KeyToken, KeyboardState, Seed, SubmitOutcome,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;

/// Application state
pub struct App<'a, S: AttemptStore> {
    pub game: Game<'a, S>,
    pub keyboard: KeyboardState,
    pub events: Receiver<GameEvent>,
    pub challenge: Option<Challenge>,
    pub input_mode: InputMode,
    pub reveal_buffer: String,
    pub share: Option<ShareMessage>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Reveal,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, counted from game events
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a, S: AttemptStore> App<'a, S> {
    pub fn new(mut game: Game<'a, S>, challenge: Option<Challenge>) -> Self {
        let events = game.subscribe();
        let mut keyboard = KeyboardState::new();
        // Stored attempts were replayed before we subscribed
        for (index, row) in game.rows().iter().enumerate() {
            keyboard.apply(&GameEvent::AttemptMade {
                index,
                row: row.clone(),
            });
        }

        let mut app = Self {
            game,
            keyboard,
            events,
            challenge,
            input_mode: InputMode::Playing,
            reveal_buffer: String::new(),
            share: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries. Type and press Enter.",
                app.game.word_length(),
                app.game.attempts_limit()
            ),
            MessageStyle::Info,
        );
        if app.challenge.is_some() {
            app.add_message(
                "You received a challenge! Ctrl-R to reveal it with the solution.",
                MessageStyle::Info,
            );
        }
        // A replayed game may already be over; it is not counted in the stats
        if let GameStatus::Ended { success } = app.game.status() {
            app.announce_end(success);
        }
        app
    }

    /// Fold pending game events into keyboard colouring and statistics
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.keyboard.apply(&event);
            if let GameEvent::Ended { success } = event {
                self.stats.total_games += 1;
                if success {
                    self.stats.games_won += 1;
                }
                self.announce_end(success);
            }
        }
    }

    fn announce_end(&mut self, success: bool) {
        if success {
            self.add_message(
                celebration(self.game.attempts().len()),
                MessageStyle::Success,
            );
        } else {
            let text = format!(
                "Out of attempts! The word was {}.",
                self.game.target().to_uppercase()
            );
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message(
            "Ctrl-S to share, Ctrl-N for a new puzzle.",
            MessageStyle::Info,
        );
    }

    /// Apply one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (InputMode::Reveal, KeyCode::Esc) => {
                self.input_mode = InputMode::Playing;
                self.reveal_buffer.clear();
                self.add_message("Reveal cancelled", MessageStyle::Info);
            }
            (InputMode::Playing, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (_, KeyCode::Char('s')) if ctrl => self.share(),
            (_, KeyCode::Char('r')) if ctrl => self.start_reveal(),
            (_, KeyCode::Char(_)) if ctrl => {}
            (InputMode::Reveal, KeyCode::Char(c)) => {
                if let Some(KeyToken::Letter(letter)) = KeyToken::letter(c) {
                    self.reveal_buffer.push(letter);
                }
            }
            (InputMode::Reveal, KeyCode::Backspace) => {
                self.reveal_buffer.pop();
            }
            (InputMode::Reveal, KeyCode::Enter) => self.reveal(),
            (InputMode::Playing, KeyCode::Char(c)) => {
                if let Some(token) = KeyToken::letter(c) {
                    self.game.handle_key(token);
                }
            }
            (InputMode::Playing, KeyCode::Backspace) => {
                self.game.handle_key(KeyToken::Backspace);
            }
            (InputMode::Playing, KeyCode::Enter) => {
                if let Some(outcome) = self.game.handle_key(KeyToken::Enter) {
                    self.report_outcome(&outcome);
                }
            }
            _ => {}
        }
        self.drain_events();
    }

    fn report_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted(_) => {}
            SubmitOutcome::Redundant => {
                self.add_message("Already tried that word", MessageStyle::Error);
            }
            SubmitOutcome::Invalid => self.add_message("Not in word list", MessageStyle::Error),
            SubmitOutcome::GameOver => {
                self.add_message("Game over. Ctrl-N for a new puzzle.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.new_game(Seed::random());
        self.challenge = None;
        self.share = None;
        self.input_mode = InputMode::Playing;
        self.reveal_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!("New puzzle {} started!", self.game.seed()),
            MessageStyle::Info,
        );
    }

    pub fn share(&mut self) {
        match self.game.share_message(true) {
            Ok(message) => {
                self.add_message("Share link ready", MessageStyle::Success);
                self.share = Some(message);
            }
            Err(e) => self.add_message(&format!("Could not share: {e}"), MessageStyle::Error),
        }
    }

    fn start_reveal(&mut self) {
        match &self.challenge {
            Some(challenge) if challenge.is_revealed() => {
                self.add_message("Challenge already revealed", MessageStyle::Info);
            }
            Some(_) => {
                self.input_mode = InputMode::Reveal;
                self.reveal_buffer.clear();
                self.add_message("Type the solution to reveal", MessageStyle::Info);
            }
            None => self.add_message("No challenge to reveal", MessageStyle::Error),
        }
    }

    fn reveal(&mut self) {
        let Some(challenge) = self.challenge.as_mut() else {
            self.input_mode = InputMode::Playing;
            return;
        };
        let result = challenge
            .try_reveal(&self.reveal_buffer)
            .map(|revealed| revealed.solution.to_uppercase());
        match result {
            Ok(solution) => {
                self.input_mode = InputMode::Playing;
                self.add_message(&format!("Revealed! The word was {solution}"), MessageStyle::Success);
            }
            Err(e) => self.add_message(&format!("Reveal failed: {e}. Try again."), MessageStyle::Error),
        }
        self.reveal_buffer.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        6 => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: AttemptStore>(app: App<'_, S>) -> Result<Option<ShareMessage>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: AttemptStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<Option<ShareMessage>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    // The last share is printed after the terminal is restored so it can be copied
    Ok(app.share)
}
