//! Zone definitions and membership tracking.
//!
//! Zones are **application-configured**, not hardcoded. Applications
//! define their zones (rooms, triggers, territories, spawn regions,
//! etc.) by registering [`Zone`] values with a [`ZoneTracker`] at
//! startup or at runtime.
//!
//! ## Key Types
//!
//! - [`ZoneId`]: Opaque zone identifier
//! - [`Zone`]: Named area with per-zone settings and a member list
//! - [`ZoneTracker`]: Membership state machine and event source

pub mod tracker;
pub mod zone;

pub use tracker::ZoneTracker;
pub use zone::{Zone, ZoneId};
