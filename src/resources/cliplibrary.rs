//! Ready-to-use sequence players, one per manifest clip.
//!
//! Built once after the textures are loaded. Anything that switches an
//! entity to another clip clones the template from here.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::sequenceplayer::SequencePlayer;
use crate::resources::petmanifest::PetManifest;

#[derive(Resource, Debug, Default, Clone)]
pub struct ClipLibrary {
    clips: FxHashMap<String, SequencePlayer>,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every clip of `manifest`, looking frame sizes up with `size_of`.
    pub fn from_manifest(
        manifest: &PetManifest,
        size_of: impl Fn(&str) -> Option<(f32, f32)>,
    ) -> Self {
        let mut library = Self::new();
        for clip in &manifest.clips {
            library.insert(clip.name.clone(), clip.build_player(&size_of));
        }
        library
    }

    pub fn insert(&mut self, name: impl Into<String>, player: SequencePlayer) {
        self.clips.insert(name.into(), player);
    }

    pub fn get(&self, name: &str) -> Option<&SequencePlayer> {
        self.clips.get(name)
    }

    /// A fresh copy of the clip's player.
    pub fn player(&self, name: &str) -> Option<SequencePlayer> {
        self.clips.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
