//! Object pool bookkeeping components.
//!
//! See [`ObjectPool`](crate::resources::objectpool::ObjectPool) for how they
//! are assigned.

use bevy_ecs::prelude::Component;

/// Marks an entity created by the object pool. `key` names the queue the
/// entity returns to.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Pooled {
    pub key: String,
}

/// Grouping entity that parents pooled instances: one root named
/// `ObjectPool` and one `<key>Pool` child per prototype key.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PoolContainer {
    pub name: String,
}
