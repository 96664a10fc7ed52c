//! Game engine
//!
//! Owns the state of one puzzle: target word, accepted attempts, the draft
//! being typed and the ended/success flags. Player mistakes are reported as
//! [`SubmitOutcome`] values, never as errors.

use super::events::{GameEvent, Subscribers};
use super::keys::KeyToken;
use super::selector::select_word;
use super::seed::Seed;
use super::store::AttemptStore;
use crate::challenge::{CodecError, ResultSummary, ShareLink, ShareMessage, encode};
use crate::config::GameConfig;
use crate::core::{AttemptRow, normalize_word, score};
use crate::wordlists::WordList;
use serde::Serialize;
use std::sync::mpsc::Receiver;

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted and scored
    Accepted(AttemptRow),
    /// Already attempted; the draft was cleared
    Redundant,
    /// Not a playable word; nothing was recorded
    Invalid,
    /// The game has ended; nothing was recorded
    GameOver,
}

impl SubmitOutcome {
    /// The scored row, for accepted submissions
    #[must_use]
    pub const fn row(&self) -> Option<&AttemptRow> {
        match self {
            Self::Accepted(row) => Some(row),
            _ => None,
        }
    }
}

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Ended { success: bool },
}

/// Read-only view of a game for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub seed: String,
    pub attempts_limit: usize,
    pub word_length: usize,
    pub attempts: Vec<String>,
    pub board: Vec<AttemptRow>,
    pub draft: String,
    pub status: GameStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Persist {
    Yes,
    No,
}

/// State machine for one seeded puzzle
///
/// # Examples
/// ```
/// use yawdle::config::GameConfig;
/// use yawdle::game::{Game, MemoryStore, SubmitOutcome};
/// use yawdle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap();
/// let mut game = Game::new(&words, MemoryStore::new(), GameConfig::default(), "x");
///
/// assert_eq!(game.target(), "apple");
/// assert_eq!(game.submit_attempt("zzzzz"), SubmitOutcome::Invalid);
/// assert!(game.submit_attempt("apple").row().unwrap().is_solved());
/// assert!(game.is_success());
/// ```
pub struct Game<'a, S: AttemptStore> {
    words: &'a WordList,
    store: S,
    config: GameConfig,
    seed: Seed,
    target: String,
    attempts: Vec<String>,
    rows: Vec<AttemptRow>,
    draft: String,
    pending: AttemptRow,
    ended: bool,
    success: bool,
    subscribers: Subscribers,
}

impl<'a, S: AttemptStore> Game<'a, S> {
    /// Create a game and start the puzzle for `seed`
    ///
    /// Attempts saved in `store` for this seed are replayed.
    pub fn new(words: &'a WordList, store: S, config: GameConfig, seed: impl Into<Seed>) -> Self {
        let mut game = Self {
            words,
            store,
            config,
            seed: Seed::new(""),
            target: String::new(),
            attempts: Vec::new(),
            rows: Vec::new(),
            draft: String::new(),
            pending: AttemptRow::blank(words.word_length()),
            ended: false,
            success: false,
            subscribers: Subscribers::default(),
        };
        game.new_game(seed);
        game
    }

    /// Discard the current puzzle and start the one for `seed`
    ///
    /// Stored attempts are replayed in order through the normal submission
    /// rules without being written back.
    pub fn new_game(&mut self, seed: impl Into<Seed>) {
        let seed = seed.into();
        let target = select_word(seed.as_str(), self.words, self.config.random_bias);
        log::debug!("Game generated for seed {seed:?}");
        log::trace!("Target word for seed {seed:?} is {target:?}");

        self.target = target.to_string();
        self.attempts.clear();
        self.rows.clear();
        self.draft.clear();
        self.pending = AttemptRow::blank(self.word_length());
        self.ended = false;
        self.success = false;
        self.seed = seed;

        self.subscribers.emit(&GameEvent::Reset {
            seed: self.seed.to_string(),
        });

        if let Some(stored) = self.store.get(self.seed.as_str()) {
            log::debug!("Replaying {} stored attempts", stored.len());
            for word in &stored {
                if self.ended {
                    break;
                }
                self.submit(word, Persist::No);
            }
        }
    }

    /// Replace the draft shown on the next row
    ///
    /// Ignored once the game has ended. The draft is normalized and truncated
    /// to the word length; it is not checked against the word list.
    pub fn update_draft(&mut self, text: &str) {
        if self.ended {
            return;
        }
        self.draft = normalize_word(text, self.word_length());
        self.pending = AttemptRow::provisional(&self.draft, self.word_length());
    }

    /// Submit a guess
    ///
    /// Checked in order: game over, redundant, not in the word list. An
    /// accepted guess is scored, saved to the store and announced to
    /// subscribers.
    pub fn submit_attempt(&mut self, word: &str) -> SubmitOutcome {
        self.submit(word, Persist::Yes)
    }

    fn submit(&mut self, word: &str, persist: Persist) -> SubmitOutcome {
        if self.ended {
            return SubmitOutcome::GameOver;
        }

        let length = self.word_length();
        let word = normalize_word(word, length);

        if self.attempts.contains(&word) {
            self.draft.clear();
            self.pending = AttemptRow::blank(length);
            return SubmitOutcome::Redundant;
        }

        if !self.words.contains(&word) {
            self.pending = AttemptRow::masked(length);
            return SubmitOutcome::Invalid;
        }

        let row = score(&self.target, &word);
        let index = self.attempts.len();
        let solved = word == self.target;

        self.attempts.push(word);
        self.rows.push(row.clone());
        self.draft.clear();
        self.pending = AttemptRow::blank(length);

        if persist == Persist::Yes {
            self.persist();
        }

        if self.attempts.len() >= self.config.attempts_limit {
            self.ended = true;
        }
        if solved {
            self.ended = true;
            self.success = true;
        }

        self.subscribers.emit(&GameEvent::AttemptMade {
            index,
            row: row.clone(),
        });
        if self.ended {
            log::debug!(
                "Game {:?} ended after {} attempts (success: {})",
                self.seed,
                self.attempts.len(),
                self.success
            );
            self.subscribers.emit(&GameEvent::Ended {
                success: self.success,
            });
        }

        SubmitOutcome::Accepted(row)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(self.seed.as_str(), &self.attempts) {
            log::warn!("Failed to persist attempts for seed {:?}: {e}", self.seed);
        }
    }

    /// Apply a logical key press
    ///
    /// Letters extend the draft up to the word length, `Backspace` removes the
    /// last letter, `Enter` submits a complete draft and clears it. Only
    /// `Enter` on a complete draft yields an outcome.
    pub fn handle_key(&mut self, key: KeyToken) -> Option<SubmitOutcome> {
        match key {
            KeyToken::Letter(letter) => {
                let mut draft = self.draft.clone();
                draft.push(letter);
                self.update_draft(&draft);
                None
            }
            KeyToken::Backspace => {
                let mut draft = self.draft.clone();
                draft.pop();
                self.update_draft(&draft);
                None
            }
            KeyToken::Enter => {
                if self.draft.len() < self.word_length() {
                    return None;
                }
                let draft = std::mem::take(&mut self.draft);
                Some(self.submit_attempt(&draft))
            }
        }
    }

    /// Subscribe to game events
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.subscribers.subscribe()
    }

    #[must_use]
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The hidden word
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    /// Scored rows of the accepted attempts
    #[must_use]
    pub fn rows(&self) -> &[AttemptRow] {
        &self.rows
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn attempts_limit(&self) -> usize {
        self.config.attempts_limit
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.words.word_length()
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.ended {
            GameStatus::Ended {
                success: self.success,
            }
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Full board: accepted rows, the pending row, then blank rows
    ///
    /// Always `attempts_limit` rows long.
    #[must_use]
    pub fn board(&self) -> Vec<AttemptRow> {
        let limit = self.attempts_limit();
        let mut board = self.rows.clone();
        if board.len() < limit {
            board.push(self.pending.clone());
        }
        board.resize(limit, AttemptRow::blank(self.word_length()));
        board
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed.to_string(),
            attempts_limit: self.attempts_limit(),
            word_length: self.word_length(),
            attempts: self.attempts.clone(),
            board: self.board(),
            draft: self.draft.clone(),
            status: self.status(),
        }
    }

    /// Coarse state summary of the accepted rows
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_rows(&self.rows)
    }

    /// Encrypt the attempt history with the target word as key
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the payload cannot be serialized or encrypted.
    pub fn challenge(&self) -> Result<String, CodecError> {
        encode(&self.target, &self.attempts)
    }

    /// Link to this puzzle, optionally carrying the encrypted challenge and
    /// the coarse summary
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the challenge cannot be encoded.
    pub fn share_link(&self, include_challenge: bool) -> Result<ShareLink, CodecError> {
        let mut link = ShareLink::new(self.seed.clone());
        if include_challenge && !self.attempts.is_empty() {
            link.challenge = Some(self.challenge()?);
            link.summary = Some(self.summary());
        }
        Ok(link)
    }

    /// Message for a sharing sink
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the challenge cannot be encoded.
    pub fn share_message(&self, include_challenge: bool) -> Result<ShareMessage, CodecError> {
        let link = self.share_link(include_challenge)?;
        Ok(ShareMessage::new(
            &self.seed,
            &self.rows,
            self.status(),
            self.attempts_limit(),
            &link.to_url(&self.config.base_url),
        ))
    }
}
