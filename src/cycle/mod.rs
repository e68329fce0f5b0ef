//! Light cycles and their trails.
//!
//! A `Cycle` moves a fixed step per tick, refuses 180° turns, and dies the
//! first time its head lands outside the playfield or inside the proximity
//! box of a trail point. Its own newest `GRACE_WINDOW` points are exempt so
//! a cycle cannot hit the point it just left.

mod light_cycle;
mod trail;

pub use light_cycle::{Crash, Cycle};
pub use trail::{EmptyTrail, Trail};
