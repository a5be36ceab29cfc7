//! Zone transition event payloads.
//!
//! One [`ZoneEvent`] is built per transition and handed to hooks and
//! observers by reference. The payload never changes after construction.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::point::Point;
use crate::zones::zone::ZoneId;

/// Opaque host reference stamped on event payloads.
///
/// Stands in for whatever owns the tracker (a screen, a map, a scene,
/// etc.). The engine never interprets it; callers use it for event
/// routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(pub u64);

impl HostId {
    /// Create a new host ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for HostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Host({})", self.0)
    }
}

/// A zone/entity interaction.
///
/// Enter and exit events carry the position that triggered the
/// transition; move events additionally carry the prior position in
/// `moved_from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEvent {
    /// Host of the tracker that fired the event, if one is set.
    pub host: Option<HostId>,

    /// The zone involved.
    pub zone: ZoneId,

    /// The entity involved.
    pub entity: EntityId,

    /// The position that triggered the event.
    pub position: Point,

    /// For move events, the position the entity came from.
    pub moved_from: Option<Point>,
}

impl ZoneEvent {
    /// Create a new event.
    pub fn new(zone: ZoneId, entity: EntityId, position: Point) -> Self {
        Self {
            host: None,
            zone,
            entity,
            position,
            moved_from: None,
        }
    }

    /// Set the host reference (builder pattern).
    #[must_use]
    pub fn with_host(mut self, host: HostId) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the prior position (builder pattern).
    #[must_use]
    pub fn with_moved_from(mut self, from: Point) -> Self {
        self.moved_from = Some(from);
        self
    }

    /// Check whether this is a move-within-zone event.
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.moved_from.is_some()
    }
}
