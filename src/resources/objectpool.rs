//! Object pool resource.
//!
//! Reuses entities keyed by prototype name instead of spawning and
//! despawning them over and over (hearts, sparkles, speech bubbles...).
//!
//! # How It Works
//!
//! - [`ObjectPool::get`] pops an inactive entity from the prototype's queue,
//!   or spawns a new one through the [`Prototype`] spawner. Either way the
//!   entity is activated (its [`Disabled`] marker removed).
//! - [`pool_get`] does the same through the world's pool and then triggers
//!   [`PoolActivatedEvent`], once the pool is back in the world so observers
//!   may read it.
//! - [`ObjectPool::push`] queues the entity again, disables it and
//!   re-parents it under its `<key>Pool` container.
//! - [`ObjectPool::clear`] forgets every queue. Entities are left alone;
//!   they go away with the scene.
//!
//! Disabled entities are skipped by default queries, so systems never see
//! pooled instances while they sit in a queue.
//!
//! The pool lives in the world as a regular resource. Systems holding
//! `&mut World` (or queuing a command) use [`pool_get`] / [`pool_push`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use bevy_ecs::world::EntityWorldMut;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::pooled::{PoolContainer, Pooled};
use crate::events::pool::PoolActivatedEvent;

const ROOT_CONTAINER_NAME: &str = "ObjectPool";

/// Inserts the components of a freshly spawned pooled entity.
pub type Spawner = Arc<dyn Fn(&mut EntityWorldMut) + Send + Sync>;

/// Blueprint for entities handed out by the pool.
#[derive(Clone)]
pub struct Prototype {
    key: String,
    spawner: Spawner,
}

impl Prototype {
    /// `name` is normalized with [`pool_key`], so `"heart (2)"` and
    /// `"heart"` share one queue.
    pub fn new(
        name: &str,
        spawner: impl Fn(&mut EntityWorldMut) + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: pool_key(name).to_string(),
            spawner: Arc::new(spawner),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype").field("key", &self.key).finish()
    }
}

/// Strip instance suffixes such as `"(Clone)"` or `" (3)"` from a name.
pub fn pool_key(name: &str) -> &str {
    let mut key = name.trim_end();
    loop {
        let stripped = key
            .strip_suffix("(Clone)")
            .or_else(|| {
                let inner = key.strip_suffix(')')?;
                let open = inner.rfind('(')?;
                let digits = &inner[open + 1..];
                (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                    .then(|| &inner[..open])
            })
            .map(str::trim_end);
        match stripped {
            Some(s) if !s.is_empty() => key = s,
            _ => return key,
        }
    }
}

#[derive(Resource, Default)]
pub struct ObjectPool {
    queues: FxHashMap<String, VecDeque<Entity>>,
    containers: FxHashMap<String, Entity>,
    root: Option<Entity>,
}

impl ObjectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an active instance of `prototype`, reusing a queued one if possible.
    ///
    /// Does not trigger [`PoolActivatedEvent`]; see [`pool_get`].
    pub fn get(&mut self, world: &mut World, prototype: &Prototype) -> Entity {
        let key = prototype.key();
        let reused = self.queues.get_mut(key).and_then(|queue| {
            // skip entries despawned while queued
            std::iter::from_fn(|| queue.pop_front()).find(|e| world.get_entity(*e).is_ok())
        });

        let entity = match reused {
            Some(entity) => entity,
            None => {
                let container = self.container_for(world, key);
                let mut entity_mut = world.spawn((
                    Pooled {
                        key: key.to_string(),
                    },
                    ChildOf(container),
                ));
                (prototype.spawner)(&mut entity_mut);
                let entity = entity_mut.id();
                debug!("Pool '{}' spawned {:?}", key, entity);
                entity
            }
        };

        world.entity_mut(entity).remove::<Disabled>();
        entity
    }

    /// Return `entity` to its queue. Returns false when nothing was queued:
    /// the entity is gone, was not created by a pool, or is already queued.
    pub fn push(&mut self, world: &mut World, entity: Entity) -> bool {
        let Ok(entity_ref) = world.get_entity(entity) else {
            return false;
        };
        let Some(key) = entity_ref.get::<Pooled>().map(|p| p.key.clone()) else {
            warn!("Entity {:?} pushed to the pool was not spawned by it", entity);
            return false;
        };

        {
            let queue = self.queues.entry(key.clone()).or_default();
            if queue.contains(&entity) {
                return false;
            }
            queue.push_back(entity);
        }

        let container = self.container_for(world, &key);
        world
            .entity_mut(entity)
            .insert((Disabled, ChildOf(container)));
        true
    }

    /// Forget all queues and cached containers. Nothing is despawned.
    pub fn clear(&mut self) {
        self.queues.clear();
        self.containers.clear();
    }

    /// Number of inactive instances waiting under `key`.
    pub fn available(&self, key: &str) -> usize {
        self.queues.get(key).map_or(0, VecDeque::len)
    }

    /// Cached `<key>Pool` container, if one was created.
    pub fn container(&self, key: &str) -> Option<Entity> {
        self.containers.get(key).copied()
    }

    pub fn root(&self) -> Option<Entity> {
        self.root
    }

    fn root_container(&mut self, world: &mut World) -> Entity {
        if let Some(root) = self.root.filter(|r| world.get_entity(*r).is_ok()) {
            return root;
        }
        let root = world
            .spawn(PoolContainer {
                name: ROOT_CONTAINER_NAME.to_string(),
            })
            .id();
        self.root = Some(root);
        root
    }

    fn container_for(&mut self, world: &mut World, key: &str) -> Entity {
        if let Some(&container) = self.containers.get(key) {
            if world.get_entity(container).is_ok() {
                return container;
            }
        }
        let root = self.root_container(world);
        let container = world
            .spawn((
                PoolContainer {
                    name: format!("{key}Pool"),
                },
                ChildOf(root),
            ))
            .id();
        self.containers.insert(key.to_string(), container);
        container
    }
}

/// [`ObjectPool::get`] through the world's pool resource, followed by a
/// [`PoolActivatedEvent`] for the handed-out entity.
///
/// Returns `None` when the world has no pool, e.g. while shutting down.
pub fn pool_get(world: &mut World, prototype: &Prototype) -> Option<Entity> {
    if !world.contains_resource::<ObjectPool>() {
        return None;
    }
    let entity =
        world.resource_scope(|world, mut pool: Mut<ObjectPool>| pool.get(world, prototype));
    world.trigger(PoolActivatedEvent { entity });
    Some(entity)
}

/// [`ObjectPool::push`] through the world's pool resource.
pub fn pool_push(world: &mut World, entity: Entity) -> bool {
    if !world.contains_resource::<ObjectPool>() {
        return false;
    }
    world.resource_scope(|world, mut pool: Mut<ObjectPool>| pool.push(world, entity))
}

/// Prototypes known to the scene, by pool key.
#[derive(Resource, Default, Debug)]
pub struct PrototypeRegistry {
    prototypes: FxHashMap<String, Prototype>,
}

impl PrototypeRegistry {
    pub fn register(&mut self, prototype: Prototype) {
        self.prototypes.insert(prototype.key().to_string(), prototype);
    }

    /// Look up by name; instance suffixes are ignored.
    pub fn get(&self, name: &str) -> Option<&Prototype> {
        self.prototypes.get(pool_key(name))
    }
}
