//! Tracker reaction hooks.

use super::event::ZoneEvent;

/// Synchronous reactions to zone transitions.
///
/// Install an implementation on a tracker to react to transitions before
/// any public observer sees them. All methods default to no-ops, so an
/// implementation picks only the transitions it cares about. The tracker
/// invokes hooks inline during the mutation that caused the transition.
pub trait ZoneHooks {
    /// Called when an entity enters a zone.
    fn on_enter(&mut self, _event: &ZoneEvent) {}

    /// Called when an entity exits a zone.
    fn on_exit(&mut self, _event: &ZoneEvent) {}

    /// Called when an entity moves within a zone it already occupies.
    fn on_move(&mut self, _event: &ZoneEvent) {}
}
