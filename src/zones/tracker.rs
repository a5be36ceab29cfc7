//! Zone membership tracking.
//!
//! The `ZoneTracker` is the engine's state machine. It owns the
//! registered zones and all per-entity tracking state, plus a spatial
//! index over entity positions, and keeps them mutually consistent:
//! after every operation, each zone's member list is exactly the set of
//! tracked, non-disabled entities whose position its area contains.
//!
//! ## Transition model
//!
//! Entities report moves through [`ZoneTracker::move_entity`]; that call
//! is the engine's sole re-evaluation trigger. Each move classifies
//! every registered zone against the entity's old membership and new
//! containment:
//! - zones left fire `ExitZone`
//! - zones newly entered fire `EnterZone`
//! - zones containing the entity before and after fire `MoveZone`
//!
//! Exits fire before enters, enters before moves. Zones are visited in
//! registration order and entities in tracking order, so event
//! sequences are deterministic.
//!
//! ## Event dispatch
//!
//! Transitions invoke the installed [`ZoneHooks`] first, then each
//! public observer in registration order, synchronously. Observers
//! receive only the event payload and hold no reference to the tracker,
//! so a handler cannot re-enter the tracker mid-mutation.
//!
//! ## Usage
//!
//! ```
//! use zonegrid::{Area, EntityId, Point, Zone, ZoneId, ZoneTracker};
//!
//! let mut tracker = ZoneTracker::new();
//! tracker.add_zone(Zone::new(ZoneId(1), Area::rect(Point::new(0, 0), Point::new(4, 4))));
//! tracker.add_entity(EntityId(7), Point::new(10, 10));
//!
//! // Walk the entity into the zone.
//! tracker.move_entity(EntityId(7), Point::new(2, 2));
//!
//! assert_eq!(tracker.entities_in_zone(ZoneId(1)), &[EntityId(7)]);
//! assert_eq!(tracker.entity_at(Point::new(2, 2)), Some(EntityId(7)));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::entity::EntityId;
use crate::core::point::Point;
use crate::events::event::{HostId, ZoneEvent};
use crate::events::hooks::ZoneHooks;
use crate::spatial::index::SpatialIndex;

use super::zone::{Zone, ZoneId};

/// Tracking state for one entity.
#[derive(Clone, Debug)]
struct EntityState {
    /// Last position reported for the entity.
    position: Point,

    /// Zones the entity currently occupies.
    zones: FxHashSet<ZoneId>,

    /// Disabled entities keep their position indexed but hold no
    /// memberships.
    disabled: bool,
}

impl EntityState {
    fn new(position: Point) -> Self {
        Self {
            position,
            zones: FxHashSet::default(),
            disabled: false,
        }
    }
}

type Observer = Box<dyn FnMut(&ZoneEvent)>;

/// Tracks which entities overlap which zones and fires transition
/// events.
///
/// Entities and zones are registered by ID; the tracker owns the
/// canonical [`Zone`] values and all per-entity state, while member
/// lists and zone sets are plain ID views into that state. Mutation on
/// an untracked entity is a caller bug and panics; duplicate
/// registration is a benign no-op; lookups at empty cells return none.
#[derive(Default)]
pub struct ZoneTracker {
    /// Host reference stamped on every event payload.
    host: Option<HostId>,

    /// Zone IDs in registration order.
    zone_order: Vec<ZoneId>,

    /// Registered zones.
    zones: FxHashMap<ZoneId, Zone>,

    /// Entity IDs in tracking order.
    entity_order: Vec<EntityId>,

    /// Per-entity tracking state.
    entities: FxHashMap<EntityId, EntityState>,

    /// Position -> occupants.
    index: SpatialIndex,

    /// Custom reactions invoked before public observers.
    hooks: Option<Box<dyn ZoneHooks>>,

    enter_observers: Vec<Observer>,
    exit_observers: Vec<Observer>,
    move_observers: Vec<Observer>,
}

impl ZoneTracker {
    /// Create a tracker with no zones, entities, or host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host reference stamped on events (builder pattern).
    #[must_use]
    pub fn with_host(mut self, host: HostId) -> Self {
        self.host = Some(host);
        self
    }

    /// Install transition hooks (builder pattern).
    ///
    /// Hooks fire once per transition, before public observers.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl ZoneHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// The host reference, if one is set.
    #[must_use]
    pub fn host(&self) -> Option<HostId> {
        self.host
    }

    /// Set or clear the host reference.
    pub fn set_host(&mut self, host: Option<HostId>) {
        self.host = host;
    }

    /// Subscribe to EnterZone events.
    ///
    /// Observers fire synchronously in registration order, after hooks.
    pub fn on_enter(&mut self, observer: impl FnMut(&ZoneEvent) + 'static) {
        self.enter_observers.push(Box::new(observer));
    }

    /// Subscribe to ExitZone events.
    pub fn on_exit(&mut self, observer: impl FnMut(&ZoneEvent) + 'static) {
        self.exit_observers.push(Box::new(observer));
    }

    /// Subscribe to MoveZone events (moves within an occupied zone).
    pub fn on_move(&mut self, observer: impl FnMut(&ZoneEvent) + 'static) {
        self.move_observers.push(Box::new(observer));
    }

    // ------------------------------------------------------------------
    // Zone operations
    // ------------------------------------------------------------------

    /// Register a zone.
    ///
    /// Returns `false` without side effects if a zone with the same ID
    /// is already registered (the argument is dropped). Otherwise every
    /// tracked, non-disabled entity already inside the zone's area
    /// becomes a member and receives one EnterZone event, in entity
    /// tracking order.
    pub fn add_zone(&mut self, zone: Zone) -> bool {
        let id = zone.id();
        if self.zones.contains_key(&id) {
            return false;
        }
        self.zone_order.push(id);
        self.zones.insert(id, zone);

        // Snapshot the tracked list; event dispatch below needs the
        // tracker mutable.
        let tracked: Vec<EntityId> = self.entity_order.clone();
        for entity in tracked {
            let Some(state) = self.entities.get(&entity) else {
                continue;
            };
            if state.disabled {
                continue;
            }
            let position = state.position;
            if !self.zones.get(&id).is_some_and(|z| z.contains(position)) {
                continue;
            }
            if let Some(state) = self.entities.get_mut(&entity) {
                state.zones.insert(id);
            }
            if let Some(zone) = self.zones.get_mut(&id) {
                zone.push_member(entity);
            }
            self.emit_enter(ZoneEvent::new(id, entity, position));
        }
        true
    }

    /// Unregister a zone.
    ///
    /// Returns `None` without side effects if no zone with that ID is
    /// registered. Otherwise every member is evicted with one ExitZone
    /// event (in entity tracking order) and the zone is returned with an
    /// empty member list.
    pub fn remove_zone(&mut self, id: ZoneId) -> Option<Zone> {
        let mut zone = self.zones.remove(&id)?;
        self.zone_order.retain(|&z| z != id);

        let members: Vec<EntityId> = self
            .entity_order
            .iter()
            .copied()
            .filter(|e| zone.members().contains(e))
            .collect();
        for entity in members {
            zone.remove_member(entity);
            let Some(state) = self.entities.get_mut(&entity) else {
                continue;
            };
            state.zones.remove(&id);
            let position = state.position;
            self.emit_exit(ZoneEvent::new(id, entity, position));
        }
        Some(zone)
    }

    /// Check whether a zone ID is registered.
    #[must_use]
    pub fn contains_zone(&self, id: ZoneId) -> bool {
        self.zones.contains_key(&id)
    }

    /// Get a registered zone.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    /// Get mutable access to a registered zone.
    ///
    /// Only the application-owned fields (`name`, `settings`) are
    /// reachable for mutation; the shape and member list stay private.
    #[must_use]
    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(&id)
    }

    /// Iterate registered zones in registration order.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zone_order.iter().filter_map(|id| self.zones.get(id))
    }

    /// Number of registered zones.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    // ------------------------------------------------------------------
    // Entity operations
    // ------------------------------------------------------------------

    /// Begin tracking an entity at a position.
    ///
    /// Returns `false` without side effects if the entity is already
    /// tracked. Otherwise the entity joins every zone whose area
    /// contains `position` (grid zones may overlap), firing one
    /// EnterZone per zone in zone registration order, and its position
    /// is registered in the spatial index.
    pub fn add_entity(&mut self, entity: EntityId, position: Point) -> bool {
        if self.entities.contains_key(&entity) {
            return false;
        }
        self.entity_order.push(entity);
        self.entities.insert(entity, EntityState::new(position));

        let entered = self.zones_containing(position);
        for zone_id in entered {
            if let Some(state) = self.entities.get_mut(&entity) {
                state.zones.insert(zone_id);
            }
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.push_member(entity);
            }
            self.emit_enter(ZoneEvent::new(zone_id, entity, position));
        }
        self.index.insert(entity, position);
        true
    }

    /// Stop tracking an entity.
    ///
    /// Fires one ExitZone per zone the entity currently occupies (in
    /// zone registration order), then discards the tracking state and
    /// the spatial index entry. The entity object itself belongs to the
    /// caller and is not destroyed.
    ///
    /// Panics if the entity is not tracked.
    pub fn remove_entity(&mut self, entity: EntityId) {
        let Some(state) = self.entities.remove(&entity) else {
            panic!("Entity {:?} is not tracked", entity);
        };
        self.entity_order.retain(|&e| e != entity);

        let position = state.position;
        let occupied: Vec<ZoneId> = self
            .zone_order
            .iter()
            .copied()
            .filter(|id| state.zones.contains(id))
            .collect();
        for zone_id in occupied {
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.remove_member(entity);
            }
            self.emit_exit(ZoneEvent::new(zone_id, entity, position));
        }
        self.index.remove(entity, position);
    }

    /// Report that an entity moved to a new position.
    ///
    /// Classifies every registered zone against the entity's old
    /// membership and new containment, then fires all exits, then all
    /// enters, then one MoveZone per zone containing the entity both
    /// before and after. A move whose membership set is unchanged fires
    /// zero enters and exits and one MoveZone per occupied zone.
    /// Disabled entities update only the spatial index.
    ///
    /// Reporting the current position is a no-op. Panics if the entity
    /// is not tracked.
    pub fn move_entity(&mut self, entity: EntityId, position: Point) {
        let Some(state) = self.entities.get_mut(&entity) else {
            panic!("Entity {:?} is not tracked", entity);
        };
        let old_position = state.position;
        if old_position == position {
            return;
        }
        state.position = position;

        if state.disabled {
            self.index.remove(entity, old_position);
            self.index.insert(entity, position);
            return;
        }

        let mut exited: SmallVec<[ZoneId; 4]> = SmallVec::new();
        let mut entered: SmallVec<[ZoneId; 4]> = SmallVec::new();
        let mut stayed: SmallVec<[ZoneId; 4]> = SmallVec::new();
        for &zone_id in &self.zone_order {
            let Some(zone) = self.zones.get(&zone_id) else {
                continue;
            };
            let was_inside = state.zones.contains(&zone_id);
            let now_inside = zone.contains(position);
            match (was_inside, now_inside) {
                (true, false) => exited.push(zone_id),
                (false, true) => entered.push(zone_id),
                (true, true) => stayed.push(zone_id),
                (false, false) => {}
            }
        }
        for zone_id in &exited {
            state.zones.remove(zone_id);
        }
        for &zone_id in &entered {
            state.zones.insert(zone_id);
        }

        for zone_id in exited {
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.remove_member(entity);
            }
            self.emit_exit(ZoneEvent::new(zone_id, entity, position));
        }
        for zone_id in entered {
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.push_member(entity);
            }
            self.emit_enter(ZoneEvent::new(zone_id, entity, position));
        }
        for zone_id in stayed {
            self.emit_move(ZoneEvent::new(zone_id, entity, position).with_moved_from(old_position));
        }

        self.index.remove(entity, old_position);
        self.index.insert(entity, position);
    }

    /// Disable zone tracking for an entity.
    ///
    /// Evicts the entity from every zone it occupies (one ExitZone per
    /// zone, in zone registration order) before setting the flag. The
    /// entity's position stays registered in the spatial index.
    /// Disabling an already-disabled entity is a no-op.
    ///
    /// Panics if the entity is not tracked.
    pub fn disable_entity(&mut self, entity: EntityId) {
        let Some(state) = self.entities.get_mut(&entity) else {
            panic!("Entity {:?} is not tracked", entity);
        };
        if state.disabled {
            return;
        }
        state.disabled = true;
        let position = state.position;
        let occupied: Vec<ZoneId> = self
            .zone_order
            .iter()
            .copied()
            .filter(|id| state.zones.contains(id))
            .collect();
        state.zones.clear();

        for zone_id in occupied {
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.remove_member(entity);
            }
            self.emit_exit(ZoneEvent::new(zone_id, entity, position));
        }
    }

    /// Re-enable zone tracking for an entity.
    ///
    /// Membership is recomputed immediately: the entity joins every zone
    /// whose area contains its current position, firing one EnterZone
    /// per zone in registration order. Enabling an entity that is not
    /// disabled is a no-op.
    ///
    /// Panics if the entity is not tracked.
    pub fn enable_entity(&mut self, entity: EntityId) {
        let Some(state) = self.entities.get_mut(&entity) else {
            panic!("Entity {:?} is not tracked", entity);
        };
        if !state.disabled {
            return;
        }
        state.disabled = false;
        let position = state.position;

        let entered = self.zones_containing(position);
        for zone_id in entered {
            if let Some(state) = self.entities.get_mut(&entity) {
                state.zones.insert(zone_id);
            }
            if let Some(zone) = self.zones.get_mut(&zone_id) {
                zone.push_member(entity);
            }
            self.emit_enter(ZoneEvent::new(zone_id, entity, position));
        }
    }

    /// Check whether an entity's zone tracking is disabled.
    ///
    /// Panics if the entity is not tracked.
    #[must_use]
    pub fn is_entity_disabled(&self, entity: EntityId) -> bool {
        let Some(state) = self.entities.get(&entity) else {
            panic!("Entity {:?} is not tracked", entity);
        };
        state.disabled
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First entity at a position, or `None` for an empty cell.
    ///
    /// With several entities sharing the cell, which one is "first" is
    /// the bucket's insertion order; callers that care should use
    /// [`ZoneTracker::entities_at`].
    #[must_use]
    pub fn entity_at(&self, position: Point) -> Option<EntityId> {
        self.index.entities_at(position).first().copied()
    }

    /// All entities at a position, in insertion order.
    #[must_use]
    pub fn entities_at(&self, position: Point) -> &[EntityId] {
        self.index.entities_at(position)
    }

    /// Check whether any entity occupies a position.
    #[must_use]
    pub fn has_entity_at(&self, position: Point) -> bool {
        self.index.contains(position)
    }

    /// Zones whose area contains a position, in registration order.
    ///
    /// Linear scan over zones; zones are typically few compared to
    /// entities.
    #[must_use]
    pub fn zones_at(&self, position: Point) -> Vec<&Zone> {
        self.zone_order
            .iter()
            .filter_map(|id| self.zones.get(id))
            .filter(|zone| zone.contains(position))
            .collect()
    }

    /// Entities inside a zone, in the order they entered.
    ///
    /// Empty for unknown zone IDs.
    #[must_use]
    pub fn entities_in_zone(&self, id: ZoneId) -> &[EntityId] {
        self.zones.get(&id).map_or(&[], |zone| zone.members())
    }

    /// Check whether an entity is tracked.
    #[must_use]
    pub fn contains_entity(&self, entity: EntityId) -> bool {
        self.entities.contains_key(&entity)
    }

    /// Last position reported for an entity.
    #[must_use]
    pub fn entity_position(&self, entity: EntityId) -> Option<Point> {
        self.entities.get(&entity).map(|state| state.position)
    }

    /// Zones an entity currently occupies, in zone registration order.
    ///
    /// Empty for untracked or disabled entities.
    #[must_use]
    pub fn entity_zones(&self, entity: EntityId) -> Vec<ZoneId> {
        let Some(state) = self.entities.get(&entity) else {
            return Vec::new();
        };
        self.zone_order
            .iter()
            .copied()
            .filter(|id| state.zones.contains(id))
            .collect()
    }

    /// Iterate tracked entity IDs in tracking order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entity_order.iter().copied()
    }

    /// Number of tracked entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Read-only view of the spatial index.
    #[must_use]
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Zone IDs whose area contains `position`, in registration order.
    fn zones_containing(&self, position: Point) -> Vec<ZoneId> {
        self.zone_order
            .iter()
            .copied()
            .filter(|id| self.zones.get(id).is_some_and(|z| z.contains(position)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    fn stamp(&self, event: ZoneEvent) -> ZoneEvent {
        match self.host {
            Some(host) => event.with_host(host),
            None => event,
        }
    }

    fn emit_enter(&mut self, event: ZoneEvent) {
        let event = self.stamp(event);
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_enter(&event);
        }
        for observer in &mut self.enter_observers {
            observer(&event);
        }
    }

    fn emit_exit(&mut self, event: ZoneEvent) {
        let event = self.stamp(event);
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_exit(&event);
        }
        for observer in &mut self.exit_observers {
            observer(&event);
        }
    }

    fn emit_move(&mut self, event: ZoneEvent) {
        let event = self.stamp(event);
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_move(&event);
        }
        for observer in &mut self.move_observers {
            observer(&event);
        }
    }
}

impl std::fmt::Debug for ZoneTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneTracker")
            .field("host", &self.host)
            .field("zone_order", &self.zone_order)
            .field("entity_order", &self.entity_order)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::area::Area;

    use super::*;

    fn rect_zone(id: u32, a: (i32, i32), b: (i32, i32)) -> Zone {
        Zone::new(
            ZoneId(id),
            Area::rect(Point::new(a.0, a.1), Point::new(b.0, b.1)),
        )
    }

    #[test]
    fn test_duplicate_add_zone_is_noop() {
        let mut tracker = ZoneTracker::new();
        assert!(tracker.add_zone(rect_zone(1, (0, 0), (4, 4))));
        assert!(!tracker.add_zone(rect_zone(1, (0, 0), (9, 9))));

        assert_eq!(tracker.zone_count(), 1);
        // The original shape is untouched.
        assert!(!tracker.zone(ZoneId(1)).unwrap().contains(Point::new(9, 9)));
    }

    #[test]
    fn test_duplicate_add_entity_is_noop() {
        let mut tracker = ZoneTracker::new();
        assert!(tracker.add_entity(EntityId(1), Point::new(0, 0)));
        assert!(!tracker.add_entity(EntityId(1), Point::new(5, 5)));

        assert_eq!(tracker.entity_count(), 1);
        assert_eq!(tracker.entity_position(EntityId(1)), Some(Point::new(0, 0)));
        assert_eq!(tracker.index().len(), 1);
    }

    #[test]
    fn test_remove_absent_zone_is_noop() {
        let mut tracker = ZoneTracker::new();
        assert!(tracker.remove_zone(ZoneId(9)).is_none());
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(2, 2));

        let moves = Rc::new(RefCell::new(0usize));
        let count = Rc::clone(&moves);
        tracker.on_move(move |_| *count.borrow_mut() += 1);

        tracker.move_entity(EntityId(1), Point::new(2, 2));
        assert_eq!(*moves.borrow(), 0);
    }

    #[test]
    fn test_zone_queries() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)).with_name("a"));
        tracker.add_zone(rect_zone(2, (2, 2), (6, 6)).with_name("b"));

        assert!(tracker.contains_zone(ZoneId(1)));
        assert!(!tracker.contains_zone(ZoneId(3)));
        assert_eq!(tracker.zone(ZoneId(2)).unwrap().name, "b");

        let names: Vec<&str> = tracker.zones().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let at_overlap: Vec<ZoneId> = tracker
            .zones_at(Point::new(3, 3))
            .iter()
            .map(|z| z.id())
            .collect();
        assert_eq!(at_overlap, vec![ZoneId(1), ZoneId(2)]);
        assert!(tracker.zones_at(Point::new(50, 50)).is_empty());
    }

    #[test]
    fn test_zone_mut_reaches_name_and_settings() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));

        let zone = tracker.zone_mut(ZoneId(1)).unwrap();
        zone.name = "renamed".to_string();
        zone.settings.insert("spawn".into(), "true".into());

        assert_eq!(tracker.zone(ZoneId(1)).unwrap().name, "renamed");
        assert_eq!(
            tracker.zone(ZoneId(1)).unwrap().setting("spawn"),
            Some("true")
        );
    }

    #[test]
    fn test_entity_queries() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(2, 2));
        tracker.add_entity(EntityId(2), Point::new(2, 2));
        tracker.add_entity(EntityId(3), Point::new(9, 9));

        assert_eq!(tracker.entity_at(Point::new(2, 2)), Some(EntityId(1)));
        assert_eq!(tracker.entities_at(Point::new(2, 2)), &[EntityId(1), EntityId(2)]);
        assert!(tracker.has_entity_at(Point::new(9, 9)));
        assert!(!tracker.has_entity_at(Point::new(0, 1)));
        assert_eq!(tracker.entity_at(Point::new(0, 1)), None);

        assert_eq!(tracker.entity_zones(EntityId(1)), vec![ZoneId(1)]);
        assert!(tracker.entity_zones(EntityId(3)).is_empty());
        assert!(tracker.entity_zones(EntityId(99)).is_empty());

        let order: Vec<EntityId> = tracker.entities().collect();
        assert_eq!(order, vec![EntityId(1), EntityId(2), EntityId(3)]);
        assert_eq!(tracker.entity_count(), 3);
    }

    #[test]
    fn test_entities_in_zone_unknown_is_empty() {
        let tracker = ZoneTracker::new();
        assert!(tracker.entities_in_zone(ZoneId(1)).is_empty());
    }

    #[test]
    fn test_host_is_stamped_on_events() {
        let mut tracker = ZoneTracker::new().with_host(HostId(7));
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        tracker.on_enter(move |e| log.borrow_mut().push(*e));

        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(1, 1));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].host, Some(HostId(7)));
    }

    #[test]
    fn test_set_host_replaces_stamp() {
        let mut tracker = ZoneTracker::new().with_host(HostId(1));
        assert_eq!(tracker.host(), Some(HostId(1)));

        tracker.set_host(None);
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        tracker.on_enter(move |e| log.borrow_mut().push(*e));

        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(1, 1));
        assert_eq!(events.borrow()[0].host, None);
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_move_untracked_panics() {
        let mut tracker = ZoneTracker::new();
        tracker.move_entity(EntityId(1), Point::new(0, 0)); // Should panic
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_remove_untracked_panics() {
        let mut tracker = ZoneTracker::new();
        tracker.remove_entity(EntityId(1)); // Should panic
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_disable_untracked_panics() {
        let mut tracker = ZoneTracker::new();
        tracker.disable_entity(EntityId(1)); // Should panic
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_enable_untracked_panics() {
        let mut tracker = ZoneTracker::new();
        tracker.enable_entity(EntityId(1)); // Should panic
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_is_disabled_untracked_panics() {
        let tracker = ZoneTracker::new();
        let _ = tracker.is_entity_disabled(EntityId(1)); // Should panic
    }

    #[test]
    fn test_disable_twice_is_noop() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(2, 2));

        let exits = Rc::new(RefCell::new(0usize));
        let count = Rc::clone(&exits);
        tracker.on_exit(move |_| *count.borrow_mut() += 1);

        tracker.disable_entity(EntityId(1));
        tracker.disable_entity(EntityId(1));

        assert_eq!(*exits.borrow(), 1);
        assert!(tracker.is_entity_disabled(EntityId(1)));
    }

    #[test]
    fn test_enable_without_disable_is_noop() {
        let mut tracker = ZoneTracker::new();
        tracker.add_zone(rect_zone(1, (0, 0), (4, 4)));
        tracker.add_entity(EntityId(1), Point::new(2, 2));

        let enters = Rc::new(RefCell::new(0usize));
        let count = Rc::clone(&enters);
        tracker.on_enter(move |_| *count.borrow_mut() += 1);

        tracker.enable_entity(EntityId(1));
        assert_eq!(*enters.borrow(), 0);
        assert_eq!(tracker.entities_in_zone(ZoneId(1)), &[EntityId(1)]);
    }

    #[test]
    fn test_debug_omits_observers() {
        let tracker = ZoneTracker::new().with_host(HostId(3));
        let debug = format!("{:?}", tracker);
        assert!(debug.contains("ZoneTracker"));
        assert!(debug.contains("host"));
    }
}
