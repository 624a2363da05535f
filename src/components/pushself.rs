//! Self-returning lifetime component for pooled entities.
//!
//! [`PushSelf`] is the pooled counterpart of a time-to-live: instead of
//! despawning, the entity goes back to the
//! [`ObjectPool`](crate::resources::objectpool::ObjectPool) once its lifetime
//! is over.
//!
//! # How It Works
//!
//! 1. The pool hands the entity out and triggers
//!    [`PoolActivatedEvent`](crate::events::pool::PoolActivatedEvent);
//!    [`reset_push_self_observer`](crate::systems::pushself::reset_push_self_observer)
//!    zeroes `elapsed`.
//! 2. [`push_self_system`](crate::systems::pushself::push_self_system) adds
//!    the scaled delta each frame.
//! 3. Once `elapsed > lifetime` the entity is pushed back, which disables it
//!    and stops the countdown until the next activation.

use bevy_ecs::prelude::Component;

/// Lifetime used by [`PushSelf::default`].
pub const DEFAULT_LIFETIME: f32 = 3.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct PushSelf {
    /// Seconds an activation lasts.
    pub lifetime: f32,
    /// Seconds since the last activation.
    pub elapsed: f32,
}

impl PushSelf {
    pub fn new(lifetime: f32) -> Self {
        PushSelf {
            lifetime,
            elapsed: 0.0,
        }
    }

    pub fn expired(&self) -> bool {
        self.elapsed > self.lifetime
    }
}

impl Default for PushSelf {
    fn default() -> Self {
        Self::new(DEFAULT_LIFETIME)
    }
}
