//! Challenge sharing
//!
//! Encrypts a finished attempt history under the solution word, builds share
//! links and scorecards, and opens received challenges.

mod codec;
mod link;
mod reveal;
mod share;
mod summary;

pub use codec::{CodecError, DecodeError, decode, encode, encode_with_rng};
pub use link::{LinkError, ShareLink};
pub use reveal::{Challenge, RevealedChallenge};
pub use share::ShareMessage;
pub use summary::ResultSummary;
