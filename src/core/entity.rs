//! Entity identification.
//!
//! Entities live outside this crate. The tracker holds a weak
//! registration keyed by `EntityId`: it never owns the object behind an
//! ID and never allocates IDs itself. Callers assign IDs and keep them
//! unique.
//!
//! ## Usage
//!
//! ```
//! use zonegrid::EntityId;
//!
//! let player = EntityId::new(0);
//! let goblin = EntityId(17);
//!
//! assert_ne!(player, goblin);
//! assert_eq!(goblin.raw(), 17);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tracked entity.
///
/// Opaque to the engine: IDs are assigned and interpreted by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
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

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
