//! Named grid regions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::area::Area;
use crate::core::entity::EntityId;
use crate::core::point::Point;

/// Zone identifier, assigned by the caller at construction.
///
/// The engine compares zones by ID only; it attaches no meaning to the
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ZoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// A named, fixed-shape region of grid positions.
///
/// The shape is immutable after construction. `name` and `settings` are
/// free for the application to change at any time; the member list is
/// maintained exclusively by the owning tracker.
///
/// ## Usage
///
/// ```
/// use zonegrid::{Area, Point, Zone, ZoneId};
///
/// let camp = Zone::new(ZoneId(1), Area::rect(Point::new(0, 0), Point::new(4, 4)))
///     .with_name("camp")
///     .with_setting("faction", "goblin");
///
/// assert!(camp.contains(Point::new(2, 2)));
/// assert_eq!(camp.setting("faction"), Some("goblin"));
/// assert!(camp.members().is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zone {
    /// Identity, fixed at construction.
    id: ZoneId,

    /// Human-readable name (for debugging/display). May be empty.
    pub name: String,

    /// Free-form string settings interpreted by the application.
    pub settings: FxHashMap<String, String>,

    /// The region covered. Never changes after construction.
    area: Area,

    /// Entities currently inside, in entry order. Derived state owned by
    /// the tracker, so it is not serialized.
    #[serde(skip)]
    members: Vec<EntityId>,
}

impl Zone {
    /// Create a zone over the given area.
    ///
    /// The name starts empty and settings start empty; members are
    /// populated by the tracker once the zone is registered.
    pub fn new(id: ZoneId, area: Area) -> Self {
        Self {
            id,
            name: String::new(),
            settings: FxHashMap::default(),
            area,
            members: Vec::new(),
        }
    }

    /// Set the zone name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a setting (builder pattern).
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// This zone's identifier.
    #[must_use]
    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// The region covered by this zone.
    #[must_use]
    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Check whether a position lies inside the zone.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.area.contains(position)
    }

    /// Look up a setting value.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Entities currently inside the zone, in the order they entered.
    #[must_use]
    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    pub(crate) fn push_member(&mut self, entity: EntityId) {
        self.members.push(entity);
    }

    pub(crate) fn remove_member(&mut self, entity: EntityId) {
        self.members.retain(|&e| e != entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zone() -> Zone {
        Zone::new(ZoneId(3), Area::rect(Point::new(0, 0), Point::new(4, 4)))
            .with_name("throne room")
            .with_setting("light", "dim")
    }

    #[test]
    fn test_new_zone_is_empty() {
        let zone = Zone::new(ZoneId(1), Area::rect(Point::new(0, 0), Point::new(1, 1)));
        assert!(zone.name.is_empty());
        assert!(zone.settings.is_empty());
        assert!(zone.members().is_empty());
    }

    #[test]
    fn test_builders() {
        let zone = sample_zone();
        assert_eq!(zone.id(), ZoneId(3));
        assert_eq!(zone.name, "throne room");
        assert_eq!(zone.setting("light"), Some("dim"));
        assert_eq!(zone.setting("missing"), None);
    }

    #[test]
    fn test_contains_delegates_to_area() {
        let zone = sample_zone();
        assert!(zone.contains(Point::new(0, 0)));
        assert!(zone.contains(Point::new(4, 4)));
        assert!(!zone.contains(Point::new(5, 5)));
        assert_eq!(zone.area().len(), 25);
    }

    #[test]
    fn test_member_mutators() {
        let mut zone = sample_zone();
        zone.push_member(EntityId(1));
        zone.push_member(EntityId(2));
        assert_eq!(zone.members(), &[EntityId(1), EntityId(2)]);

        zone.remove_member(EntityId(1));
        assert_eq!(zone.members(), &[EntityId(2)]);

        // Removing a non-member changes nothing.
        zone.remove_member(EntityId(99));
        assert_eq!(zone.members(), &[EntityId(2)]);
    }

    #[test]
    fn test_zone_id_display() {
        assert_eq!(format!("{}", ZoneId(5)), "Zone(5)");
    }

    #[test]
    fn test_serialization_skips_members() {
        let mut zone = sample_zone();
        zone.push_member(EntityId(1));

        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), zone.id());
        assert_eq!(back.name, zone.name);
        assert_eq!(back.settings, zone.settings);
        assert_eq!(back.area(), zone.area());
        assert!(back.members().is_empty());
    }
}
