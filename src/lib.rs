//! # zonegrid
//!
//! A grid-based zone and entity tracking engine for tile worlds.
//!
//! ## Design Principles
//!
//! 1. **Application-Owned Entities**: The tracker never owns entity
//!    objects. Callers register opaque `EntityId`s and report moves;
//!    everything else is derived.
//!
//! 2. **Settled State**: Every operation leaves zone membership and the
//!    spatial index consistent with per-entity state before it returns.
//!    There is no deferred or batched re-evaluation.
//!
//! 3. **Deterministic Events**: Zones fire in registration order and
//!    entities in tracking order, with exits before enters before
//!    moves. The same operation sequence always produces the same
//!    event log.
//!
//! ## Architecture
//!
//! - **Arena Ownership**: `ZoneTracker` owns the canonical `Zone`
//!   values; member lists and zone sets are plain ID views into that
//!   arena, so there is no shared-ownership graph to keep alive.
//!
//! - **Inline Dispatch**: Transition events invoke hooks and observers
//!   synchronously with copied payloads. Handlers hold no tracker
//!   reference, so they cannot re-enter mid-mutation.
//!
//! ## Modules
//!
//! - `core`: Points, rectangles, areas, entity identity
//! - `events`: Transition payloads, hooks, host identity
//! - `spatial`: Position -> entity index
//! - `zones`: Zone definitions and the membership tracker

pub mod core;
pub mod events;
pub mod spatial;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Area, EntityId, Point, Rect};

pub use crate::events::{HostId, ZoneEvent, ZoneHooks};

pub use crate::spatial::SpatialIndex;

pub use crate::zones::{Zone, ZoneId, ZoneTracker};
