//! Zone transition events and hooks.
//!
//! Every membership change fires a [`ZoneEvent`]: first through the
//! tracker's [`ZoneHooks`] (if installed), then through the public
//! observer lists in registration order. Dispatch is synchronous and
//! inline with the mutation that caused it; nothing is queued or
//! deferred.

pub mod event;
pub mod hooks;

pub use event::{HostId, ZoneEvent};
pub use hooks::ZoneHooks;
