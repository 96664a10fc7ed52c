//! Core domain types for the guessing game
//!
//! Pure building blocks with no I/O: letter states and rows, input
//! normalization, scoring and the seeded random sequence.

mod letter;
mod rng;
mod score;
mod word;

pub use letter::{AttemptRow, LetterCell, LetterState};
pub use rng::SeededRng;
pub use score::score;
pub use word::{is_valid_word, normalize_letter, normalize_word};
