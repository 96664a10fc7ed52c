//! Command implementations

pub mod distribution;
pub mod reveal;
pub mod simple;

pub use distribution::{BucketHits, Distribution, sample_distribution};
pub use reveal::{RevealResult, reveal_link};
pub use simple::run_simple;
