//! Points and the playfield rectangle.

use serde::{Deserialize, Serialize};

use super::config::{COLLISION_HALF_EXTENT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use super::Direction;

/// A real-valued position in playfield units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Step `distance` units along `direction`, per axis.
    #[must_use]
    pub fn step(self, direction: Direction, distance: f32) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + f32::from(dx) * distance,
            y: self.y + f32::from(dy) * distance,
        }
    }

    /// Axis-aligned proximity test.
    ///
    /// Two points touch when both `|Δx|` and `|Δy|` are strictly below
    /// [`COLLISION_HALF_EXTENT`]: a 10×10 box, not a circle.
    #[must_use]
    pub fn touches(self, other: Point) -> bool {
        (self.x - other.x).abs() < COLLISION_HALF_EXTENT
            && (self.y - other.y).abs() < COLLISION_HALF_EXTENT
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The fixed arena. Bounds are inclusive on every edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// The 800×600 arena every game is played on.
    pub const CLASSIC: Playfield = Playfield {
        width: PLAYFIELD_WIDTH,
        height: PLAYFIELD_HEIGHT,
    };

    /// `0 <= x <= width && 0 <= y <= height`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Point::new(200.0, 300.0);
        assert_eq!(p.step(Direction::Right, 5.0), Point::new(205.0, 300.0));
        assert_eq!(p.step(Direction::Up, 5.0), Point::new(200.0, 295.0));
        assert_eq!(p.step(Direction::Down, 5.0), Point::new(200.0, 305.0));
        assert_eq!(p.step(Direction::Left, 5.0), Point::new(195.0, 300.0));
    }

    #[test]
    fn test_touches_is_a_box() {
        let origin = Point::new(100.0, 100.0);
        assert!(origin.touches(origin));
        // Corner of the box: inside on both axes, outside a radius-5 circle
        assert!(origin.touches(Point::new(104.0, 104.0)));
        assert!(!origin.touches(Point::new(105.0, 100.0)));
        assert!(!origin.touches(Point::new(100.0, 95.0)));
        assert!(!origin.touches(Point::new(104.0, 110.0)));
    }

    #[test]
    fn test_playfield_bounds_inclusive() {
        let field = Playfield::CLASSIC;
        assert!(field.contains(Point::new(0.0, 0.0)));
        assert!(field.contains(Point::new(800.0, 600.0)));
        assert!(!field.contains(Point::new(805.0, 300.0)));
        assert!(!field.contains(Point::new(-0.5, 300.0)));
        assert!(!field.contains(Point::new(400.0, 600.5)));
        assert!(!field.contains(Point::new(400.0, -5.0)));
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point = (1.5, 2.5).into();
        let t: (f32, f32) = p.into();
        assert_eq!(t, (1.5, 2.5));
        assert_eq!(p.to_string(), "(1.5, 2.5)");
    }
}
