//! Win/loss rules.
//!
//! A game ends on the first tick where at least one cycle crashes. Who
//! crashed on that tick is the only input to the outcome.

pub mod outcome;

pub use outcome::{GameResult, DRAW_LABEL};
