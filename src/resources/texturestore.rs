//! Texture store resource.
//!
//! Textures are keyed by the path they were loaded from. Frame keys in
//! [`Frame`](crate::components::sequenceplayer::Frame), sprites and raw
//! images all point into this store.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{error, info};
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<Arc<str>, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: impl Into<Arc<str>>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Size in pixels of the texture stored under `key`.
    pub fn size(&self, key: &str) -> Option<(f32, f32)> {
        self.map
            .get(key)
            .map(|t| (t.width as f32, t.height as f32))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Load every path not already in the store. Failures are logged and
    /// skipped; returns how many textures were loaded.
    pub fn load_all<'a>(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        paths: impl IntoIterator<Item = &'a str>,
    ) -> usize {
        let mut loaded = 0;
        for path in paths {
            if self.map.contains_key(path) {
                continue;
            }
            match rl.load_texture(thread, path) {
                Ok(texture) => {
                    self.insert(path, texture);
                    loaded += 1;
                }
                Err(e) => error!("Failed to load texture {}: {}", path, e),
            }
        }
        info!("Loaded {} textures ({} total)", loaded, self.len());
        loaded
    }
}
