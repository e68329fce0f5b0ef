//! A single light cycle: movement, turning and collision checks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::trail::Trail;
use crate::core::{
    Color, CycleSpec, Direction, Playfield, Point, GRACE_WINDOW, STEP_DISTANCE,
};

/// Why a cycle died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crash {
    /// Left the playfield.
    OutOfBounds,
    /// Ran into the other cycle's trail.
    OpponentTrail,
    /// Ran into its own trail, outside the grace window.
    OwnTrail,
}

/// One player's cycle.
///
/// Alive until the first crash; after that every mutating call is a no-op.
///
/// ```
/// use light_cycle::cycle::Cycle;
/// use light_cycle::core::{Color, Direction, Point};
///
/// let mut cycle = Cycle::new("Player 1", Color::CYAN, Point::new(200.0, 300.0), Direction::Right);
/// cycle.advance();
/// assert_eq!(cycle.position(), Point::new(205.0, 300.0));
/// assert_eq!(cycle.trail().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    name: String,
    color: Color,
    position: Point,
    direction: Direction,
    trail: Trail,
    alive: bool,
    speed: f32,
    crash: Option<Crash>,
}

impl Cycle {
    /// Create a live cycle at `spawn`, moving `STEP_DISTANCE` per tick.
    pub fn new(name: impl Into<String>, color: Color, spawn: Point, heading: Direction) -> Self {
        Self {
            name: name.into(),
            color,
            position: spawn,
            direction: heading,
            trail: Trail::starting_at(spawn),
            alive: true,
            speed: STEP_DISTANCE,
            crash: None,
        }
    }

    #[must_use]
    pub fn from_spec(spec: &CycleSpec) -> Self {
        Self::new(spec.name.clone(), spec.color, spec.spawn, spec.heading)
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Cause of death, `None` while alive.
    #[must_use]
    pub fn crash(&self) -> Option<Crash> {
        self.crash
    }

    // === Simulation ===

    /// Step one tick along the current heading and record the new position.
    pub fn advance(&mut self) {
        if !self.alive {
            return;
        }
        self.position = self.position.step(self.direction, self.speed);
        self.trail.push(self.position);
    }

    /// Request a new heading, effective on the next `advance`.
    ///
    /// Reversals are refused. Returns whether the heading is now `requested`
    /// because of this call; always false for a dead cycle.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if !self.alive {
            return false;
        }
        if self.direction.is_opposite(requested) {
            debug!(cycle = %self.name, heading = %self.direction, %requested, "reversal refused");
            return false;
        }
        self.direction = requested;
        true
    }

    /// Check the current position against the walls, `other_trail`, and this
    /// cycle's own trail minus the grace window. Kills the cycle on a hit.
    ///
    /// Returns true only for a new crash; a dead cycle never collides again.
    pub fn check_collision(&mut self, other_trail: &Trail) -> bool {
        if !self.alive {
            return false;
        }
        match self.detect_crash(other_trail) {
            Some(crash) => {
                debug!(cycle = %self.name, position = %self.position, ?crash, "cycle crashed");
                self.alive = false;
                self.crash = Some(crash);
                true
            }
            None => false,
        }
    }

    fn detect_crash(&self, other_trail: &Trail) -> Option<Crash> {
        if !Playfield::CLASSIC.contains(self.position) {
            return Some(Crash::OutOfBounds);
        }
        let head = self.position;
        if other_trail.iter().any(|p| head.touches(p)) {
            return Some(Crash::OpponentTrail);
        }
        if self.trail.excluding_recent(GRACE_WINDOW).any(|p| head.touches(p)) {
            return Some(Crash::OwnTrail);
        }
        None
    }
}
