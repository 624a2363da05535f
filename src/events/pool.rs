//! Object pool notifications.

use bevy_ecs::prelude::*;

/// An entity was handed out by the [`ObjectPool`](crate::resources::objectpool::ObjectPool),
/// either freshly spawned or reused from its queue.
///
/// Triggered by [`pool_get`](crate::resources::objectpool::pool_get) after
/// the pool is back in the world.
///
/// Components that keep per-use state (such as
/// [`PushSelf`](crate::components::pushself::PushSelf)) observe this to reset.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolActivatedEvent {
    pub entity: Entity,
}
