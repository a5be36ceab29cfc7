//! Region shapes for zones.
//!
//! An [`Area`] is a fixed set of grid positions plus a derived bounding
//! rectangle. Areas never change after construction: zone shapes are
//! immutable by contract, so the set is built once and only queried.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::point::{Point, Rect};

/// An immutable set of grid positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    points: FxHashSet<Point>,
    bounds: Option<Rect>,
}

impl Area {
    /// Create an area covering every cell of a rectangle.
    ///
    /// Corners may be given in any order.
    #[must_use]
    pub fn rect(a: Point, b: Point) -> Self {
        let bounds = Rect::new(a, b);
        Self {
            points: bounds.points().collect(),
            bounds: Some(bounds),
        }
    }

    /// Create an area from an explicit list of positions.
    ///
    /// Duplicates collapse into one cell.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let points: FxHashSet<Point> = points.into_iter().collect();
        let bounds = bounds_of(&points);
        Self { points, bounds }
    }

    /// Check whether a position belongs to the area.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.points.contains(&position)
    }

    /// Number of positions in the area.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the area covers no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding rectangle, or `None` for an empty area.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Iterate the positions in the area (unspecified order).
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

fn bounds_of(points: &FxHashSet<Point>) -> Option<Rect> {
    let mut iter = points.iter();
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for &p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(Rect::new(min, max))
}
