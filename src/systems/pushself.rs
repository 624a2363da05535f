//! Self-returning lifetime system.
//!
//! Counts [`PushSelf`] lifetimes and hands expired entities back to the
//! [`ObjectPool`]. The return is queued as a command because it needs the
//! whole world (re-parenting, disabling).

use bevy_ecs::prelude::*;

use crate::components::pushself::PushSelf;
use crate::events::pool::PoolActivatedEvent;
use crate::resources::objectpool::{ObjectPool, pool_push};
use crate::resources::worldtime::WorldTime;

/// Advance lifetimes and return expired entities to the pool.
///
/// When the world has no [`ObjectPool`] (for example during teardown) the
/// countdown still runs but nothing is returned.
pub fn push_self_system(
    world_time: Res<WorldTime>,
    pool: Option<Res<ObjectPool>>,
    mut query: Query<(Entity, &mut PushSelf)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut push_self) in query.iter_mut() {
        push_self.elapsed += dt;
        if push_self.expired() && pool.is_some() {
            commands.queue(move |world: &mut World| {
                pool_push(world, entity);
            });
        }
    }
}

/// Restart the lifetime of an entity the pool just handed out.
pub fn reset_push_self_observer(
    trigger: On<PoolActivatedEvent>,
    mut query: Query<&mut PushSelf>,
) {
    if let Ok(mut push_self) = query.get_mut(trigger.event().entity) {
        push_self.elapsed = 0.0;
    }
}
