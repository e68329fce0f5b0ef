//! Append-only trail of visited positions.
//!
//! Backed by an `im::Vector` so a trail can be handed to the opponent's
//! collision scan or to a frame snapshot without copying the points.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Point;

/// Rejected attempt to build a trail with no points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("a trail needs at least one point")]
pub struct EmptyTrail;

/// Ordered positions a cycle has occupied, oldest first.
///
/// Never empty: a trail starts with the spawn point and only grows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vector<Point>", into = "Vector<Point>")]
pub struct Trail {
    points: Vector<Point>,
}

impl Trail {
    /// A trail holding only `origin`.
    #[must_use]
    pub fn starting_at(origin: Point) -> Self {
        Self {
            points: Vector::unit(origin),
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push_back(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point.
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Every point except the `recent` newest ones.
    ///
    /// Drops the whole trail when it is shorter than `recent`.
    pub fn excluding_recent(&self, recent: usize) -> impl Iterator<Item = Point> + '_ {
        let keep = self.points.len().saturating_sub(recent);
        self.points.iter().take(keep).copied()
    }

    /// Points as `(x, y)` tuples, for drivers that want plain data.
    #[must_use]
    pub fn to_tuples(&self) -> Vec<(f32, f32)> {
        self.iter().map(Into::into).collect()
    }

    /// Borrow the underlying persistent vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector<Point> {
        &self.points
    }
}

impl TryFrom<Vector<Point>> for Trail {
    type Error = EmptyTrail;

    fn try_from(points: Vector<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            Err(EmptyTrail)
        } else {
            Ok(Self { points })
        }
    }
}

impl From<Trail> for Vector<Point> {
    fn from(trail: Trail) -> Self {
        trail.points
    }
}

impl std::ops::Index<usize> for Trail {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
