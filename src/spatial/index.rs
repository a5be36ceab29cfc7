//! Position-indexed entity lookup.
//!
//! The `SpatialIndex` maps grid positions to the entities occupying them,
//! giving O(1) average point queries. It supports:
//! - Multiple entities sharing one cell
//! - Lazy bucket creation on first occupancy
//! - Bucket removal when the last entity vacates
//!
//! The index never reads live entity state. Callers supply the position
//! for both insertion and removal, so removal must use the position the
//! entity occupied before any mutation was applied to it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::entity::EntityId;
use crate::core::point::Point;

/// Maps grid positions to the entities at each position.
///
/// ## Usage
///
/// ```
/// use zonegrid::{EntityId, Point, SpatialIndex};
///
/// let mut index = SpatialIndex::new();
/// index.insert(EntityId(1), Point::new(3, 4));
/// index.insert(EntityId(2), Point::new(3, 4));
///
/// assert_eq!(index.entities_at(Point::new(3, 4)), &[EntityId(1), EntityId(2)]);
/// assert!(index.entities_at(Point::new(0, 0)).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpatialIndex {
    /// Occupied cells: position -> entities there, in insertion order.
    cells: FxHashMap<Point, SmallVec<[EntityId; 4]>>,

    /// Total entity count across all cells.
    len: usize,
}

impl SpatialIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity at a position; creates the bucket if absent.
    ///
    /// Panics if the entity is already present at that position.
    pub fn insert(&mut self, entity: EntityId, position: Point) {
        let bucket = self.cells.entry(position).or_default();
        if bucket.contains(&entity) {
            panic!("Entity {:?} already indexed at {}", entity, position);
        }
        bucket.push(entity);
        self.len += 1;
    }

    /// Remove an entity from the bucket at `position`.
    ///
    /// `position` must be where the entity was inserted; the index holds
    /// no other record of it. The bucket is dropped once it empties.
    ///
    /// Panics if the entity is not indexed at that position.
    pub fn remove(&mut self, entity: EntityId, position: Point) {
        let Some(bucket) = self.cells.get_mut(&position) else {
            panic!("Entity {:?} is not indexed at {}", entity, position);
        };
        let Some(at) = bucket.iter().position(|&e| e == entity) else {
            panic!("Entity {:?} is not indexed at {}", entity, position);
        };
        bucket.remove(at);
        self.len -= 1;
        if bucket.is_empty() {
            self.cells.remove(&position);
        }
    }

    /// Get all entities at a position, in insertion order.
    ///
    /// Empty for vacant cells.
    #[must_use]
    pub fn entities_at(&self, position: Point) -> &[EntityId] {
        self.cells.get(&position).map_or(&[], |b| b.as_slice())
    }

    /// Check whether any entity occupies a position.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.cells.contains_key(&position)
    }

    /// Total number of indexed entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the index holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the occupied positions (unspecified order).
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.keys().copied()
    }
}
