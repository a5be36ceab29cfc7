//! Grid geometry primitives.
//!
//! `Point` is an integer grid coordinate; `Rect` is an inclusive
//! axis-aligned rectangle. Zone shapes and area bounds build on these.

use serde::{Deserialize, Serialize};

/// A position on the grid.
///
/// Coordinates are plain integers; the engine attaches no meaning to
/// sign or origin.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point shifted by the given offsets.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An inclusive axis-aligned rectangle on the grid.
///
/// Corners are normalized at construction: `min` holds the smallest
/// x and y, `max` the largest, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    /// Create a rectangle from two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest corner (inclusive).
    #[must_use]
    pub const fn min(self) -> Point {
        self.min
    }

    /// Largest corner (inclusive).
    #[must_use]
    pub const fn max(self) -> Point {
        self.max
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.max.y - self.min.y + 1
    }

    /// Number of cells covered.
    #[must_use]
    pub fn count(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Check whether a point lies inside the rectangle, edges included.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Iterate all covered points in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}
