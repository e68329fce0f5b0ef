//! # light-cycle
//!
//! Game core for a two-player light cycle arcade game.
//!
//! Each player steers a cycle that leaves a permanent trail. A cycle dies when
//! it leaves the 800×600 playfield or its head lands within a 10×10 box of
//! any trail point, its own included (minus the newest `GRACE_WINDOW` points).
//! The last cycle standing wins; crashing on the same tick is a draw.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No window, clock or device access. A platform driver
//!    feeds input, calls `tick` once per frame and draws a snapshot.
//!
//! 2. **Fresh values over resets**: Restarting builds a new `Simulation`
//!    rather than reviving the old cycles.
//!
//! 3. **Cheap snapshots**: Trails are `im` persistent vectors, so handing a
//!    frame to the renderer does not copy them.
//!
//! ## Modules
//!
//! - `core`: Directions, geometry, players, colors, configuration, errors
//! - `cycle`: A single cycle and its trail
//! - `rules`: Game outcomes
//! - `sim`: The two-cycle simulation and frame snapshots
//! - `frontend`: Input decoding, frame sessions and display lists
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cycle;
pub mod rules;
pub mod sim;
pub mod frontend;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ConfigError, CycleSpec, Direction, GameConfig, ParseDirectionError, PlayerId,
    PlayerMap, Playfield, Point, SimulationError,
    COLLISION_HALF_EXTENT, GRACE_WINDOW, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, STEP_DISTANCE,
    TICKS_PER_SECOND,
};

pub use crate::cycle::{Crash, Cycle, EmptyTrail, Trail};

pub use crate::rules::{GameResult, DRAW_LABEL};

pub use crate::sim::{CycleView, FrameSnapshot, Simulation, Status};

pub use crate::frontend::{
    Command, Controls, DrawCommand, InputEvent, Key, PointerButton, Scene, Session,
    FRAME_INTERVAL,
};
