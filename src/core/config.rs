//! Game configuration and the fixed constants of the arena.
//!
//! Board size, speed and collision geometry are fixed for every game. The
//! only thing a `GameConfig` chooses is how each cycle starts: its name,
//! color, spawn point and heading.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::direction::Direction;
use super::error::ConfigError;
use super::geometry::{Playfield, Point};
use super::player::{PlayerId, PlayerMap, PLAYER_COUNT};

/// Playfield width in logical units.
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Playfield height in logical units.
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

/// Distance a cycle travels per tick.
pub const STEP_DISTANCE: f32 = 5.0;

/// Most recent own trail points ignored by the self-collision scan.
pub const GRACE_WINDOW: usize = 10;

/// Half the side of the square proximity box used for trail hits.
pub const COLLISION_HALF_EXTENT: f32 = 5.0;

/// Frames (and therefore ticks) per second the driver targets.
pub const TICKS_PER_SECOND: u32 = 60;

/// Starting state of one cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleSpec {
    /// Display name; also what the winner banner shows.
    pub name: String,
    pub color: Color,
    pub spawn: Point,
    pub heading: Direction,
}

impl CycleSpec {
    pub fn new(name: impl Into<String>, color: Color, spawn: Point, heading: Direction) -> Self {
        Self {
            name: name.into(),
            color,
            spawn,
            heading,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use light_cycle::core::{Color, CycleSpec, Direction, GameConfig, PlayerId, Point};
///
/// let config = GameConfig::classic().with_cycle(
///     PlayerId::SECOND,
///     CycleSpec::new("Blue", Color::rgb(0, 0, 255), Point::new(600.0, 300.0), Direction::Left),
/// );
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cycle(PlayerId::SECOND).name, "Blue");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    cycles: PlayerMap<CycleSpec>,
}

impl GameConfig {
    /// The classic matchup: cyan "Player 1" at (200, 300) heading right
    /// against yellow "Player 2" at (600, 300) heading left.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            cycles: PlayerMap::pair(
                CycleSpec::new(
                    "Player 1",
                    Color::CYAN,
                    Point::new(200.0, 300.0),
                    Direction::Right,
                ),
                CycleSpec::new(
                    "Player 2",
                    Color::YELLOW,
                    Point::new(600.0, 300.0),
                    Direction::Left,
                ),
            ),
        }
    }

    /// Build from explicit specs for the first and second cycle.
    #[must_use]
    pub fn new(first: CycleSpec, second: CycleSpec) -> Self {
        Self {
            cycles: PlayerMap::pair(first, second),
        }
    }

    /// Replace one cycle's spec.
    #[must_use]
    pub fn with_cycle(mut self, player: PlayerId, spec: CycleSpec) -> Self {
        self.cycles[player] = spec;
        self
    }

    #[must_use]
    pub fn cycle(&self, player: PlayerId) -> &CycleSpec {
        &self.cycles[player]
    }

    pub fn cycles(&self) -> impl Iterator<Item = (PlayerId, &CycleSpec)> {
        self.cycles.iter()
    }

    /// Reject a wrong number of cycles, spawns outside the playfield, and
    /// empty or repeated names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles.player_count() != PLAYER_COUNT {
            return Err(ConfigError::PlayerCount {
                expected: PLAYER_COUNT,
                found: self.cycles.player_count(),
            });
        }
        let mut seen = FxHashSet::default();
        for (player, spec) in self.cycles.iter() {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::EmptyName {
                    index: player.index(),
                });
            }
            if !Playfield::CLASSIC.contains(spec.spawn) {
                return Err(ConfigError::SpawnOutOfBounds {
                    name: spec.name.clone(),
                    spawn: spec.spawn,
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateName(spec.name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
