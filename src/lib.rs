//! yawdle
//!
//! A seeded word-guessing game. A seed picks the same target word on every
//! machine, finished games can be shared as encrypted challenge links, and a
//! recipient can open a challenge only by knowing the solution.
//!
//! # Quick Start
//!
//! ```rust
//! use yawdle::config::GameConfig;
//! use yawdle::game::{Game, MemoryStore};
//! use yawdle::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let mut game = Game::new(words, MemoryStore::new(), GameConfig::default(), "42");
//!
//! let outcome = game.submit_attempt("crane");
//! println!("{:?}", outcome.row().map(|row| row.to_emoji()));
//! println!("{}", game.share_message(true).unwrap().body);
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Puzzle selection and game engine
pub mod game;

// Challenge links and scorecards
pub mod challenge;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
