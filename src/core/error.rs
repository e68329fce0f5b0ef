//! Error types for caller contract violations.
//!
//! The simulation itself has no failure modes: crashes are ordinary state
//! transitions. These errors only report bad input from the driver.

use thiserror::Error;

use super::geometry::Point;

/// Errors returned by [`Simulation`](crate::sim::Simulation) operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SimulationError {
    /// A cycle index outside `0..count`.
    #[error("invalid player index {index}: game has {count} cycles")]
    InvalidPlayer { index: usize, count: usize },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration validation failures.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("expected {expected} cycles, found {found}")]
    PlayerCount { expected: usize, found: usize },

    #[error("cycle `{name}` spawns at {spawn}, outside the playfield")]
    SpawnOutOfBounds { name: String, spawn: Point },

    #[error("cycle {index} has an empty name")]
    EmptyName { index: usize },

    #[error("two cycles share the name `{0}`")]
    DuplicateName(String),
}

/// A direction name that is not one of `up`, `down`, `left`, `right`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(pub String);
