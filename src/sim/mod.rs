//! Simulation core: two cycles, one tick per frame.
//!
//! The driver calls, in order, once per frame:
//! 1. `apply_turn` for any direction requests,
//! 2. `tick`,
//! 3. `snapshot` (or the individual queries) to render.

mod simulation;
mod snapshot;

pub use simulation::{Simulation, Status};
pub use snapshot::{CycleView, FrameSnapshot};
