//! Core value types: directions, geometry, players, colors, configuration
//! and errors.
//!
//! Nothing in here knows about cycles or ticks; the simulation is built on
//! top of these in `cycle` and `sim`.

pub mod direction;
pub mod geometry;
pub mod player;
pub mod color;
pub mod config;
pub mod error;

pub use direction::Direction;
pub use geometry::{Playfield, Point};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use color::Color;
pub use config::{
    CycleSpec, GameConfig, COLLISION_HALF_EXTENT, GRACE_WINDOW, PLAYFIELD_HEIGHT,
    PLAYFIELD_WIDTH, STEP_DISTANCE, TICKS_PER_SECOND,
};
pub use error::{ConfigError, ParseDirectionError, SimulationError};
