//! Headings a cycle can travel in.
//!
//! Screen coordinates grow downward, so `Up` moves toward `y = 0`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseDirectionError;

/// One of the four axis-aligned headings.
///
/// Each direction carries a unit vector with exactly one nonzero component.
///
/// ```
/// use light_cycle::core::Direction;
///
/// assert_eq!(Direction::Up.vector(), (0, -1));
/// assert!(Direction::Left.is_opposite(Direction::Right));
/// assert!(!Direction::Left.is_opposite(Direction::Up));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(dx, dy)` vector for this heading.
    #[must_use]
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The heading pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when the two vectors are exact negations of each other.
    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        let (dx, dy) = self.vector();
        let (ox, oy) = other.vector();
        dx == -ox && dy == -oy
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
