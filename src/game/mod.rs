//! Game lifecycle
//!
//! Puzzle selection from a seed, the engine state machine, persistence of
//! attempts and the notifications observers consume.

mod engine;
pub mod events;
pub mod keyboard;
mod keys;
mod seed;
mod selector;
pub mod store;

pub use engine::{Game, GameSnapshot, GameStatus, SubmitOutcome};
pub use events::GameEvent;
pub use keyboard::{KEYBOARD_LAYOUT, KeyboardState};
pub use keys::KeyToken;
pub use seed::Seed;
pub use selector::select_word;
pub use store::{AttemptStore, FileStore, MemoryStore, StoreError};
