//! Terminal output formatting
//!
//! Coloured boards, scorecards and command reports for the text modes.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_challenge, print_distribution, print_keyboard, print_reveal_result,
    print_share,
};
