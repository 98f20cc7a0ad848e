//! Capability contract for pooled objects

/// Lifecycle hooks for objects managed by a [`Pool`](super::Pool)
///
/// The pool calls `set_active(true)` then `on_spawn` when an instance is
/// handed out, and `set_active(false)` then `on_despawn` when it comes back.
/// `set_active` is only called when the pool manages activation.
pub trait Poolable: 'static {
    /// Called once each time the instance leaves the pool
    fn on_spawn(&mut self);

    /// Called once each time the instance returns to the pool
    fn on_despawn(&mut self);

    /// Toggle the usable/idle representation (visibility, enablement, ...)
    fn set_active(&mut self, _active: bool) {}
}
