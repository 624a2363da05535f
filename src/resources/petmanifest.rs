//! Pet manifest: what the pet looks like and which clips it plays.
//!
//! Loaded from JSON at startup. Frames are texture paths; their sizes come
//! from the [`TextureStore`](super::texturestore::TextureStore) once loaded.
//!
//! ```json
//! {
//!   "clips": [
//!     { "name": "idle", "frames": ["assets/idle/idle_0001.png"], "fps": 12, "mode": "loop" },
//!     { "name": "heart", "frames": ["assets/heart.png"], "mode": "once" }
//!   ],
//!   "pet": { "position": [200, 380], "idle_clip": "idle", "hitbox": [120, 160] },
//!   "prototypes": [ { "name": "heart", "clip": "heart", "lifetime": 3.0 } ]
//! }
//! ```

use std::error::Error;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::blendshape::BlendShape;
use crate::components::pushself::DEFAULT_LIFETIME;
use crate::components::sequenceplayer::{
    DEFAULT_FPS, Frame, FrameTarget, PlaybackMode, SequencePlayer, TimeMode,
};

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_true() -> bool {
    true
}

fn default_lifetime() -> f32 {
    DEFAULT_LIFETIME
}

/// A named frame sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDef {
    pub name: String,
    pub frames: Vec<String>,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub mode: PlaybackMode,
    #[serde(default)]
    pub time_mode: TimeMode,
    #[serde(default)]
    pub target: FrameTarget,
    #[serde(default)]
    pub start_frame: usize,
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Order frames by texture path instead of listing order.
    #[serde(default)]
    pub sort_by_name: bool,
}

impl ClipDef {
    /// Resolve frame sizes with `size_of` and build a player. Frames whose
    /// texture is unknown are dropped with a warning.
    pub fn build_player(&self, size_of: impl Fn(&str) -> Option<(f32, f32)>) -> SequencePlayer {
        let frames: Vec<Frame> = self
            .frames
            .iter()
            .filter_map(|path| match size_of(path) {
                Some((w, h)) => Some(Frame::new(path.as_str(), w, h)),
                None => {
                    warn!("Clip '{}': texture {} not loaded, frame skipped", self.name, path);
                    None
                }
            })
            .collect();

        let mut player = SequencePlayer::new(frames)
            .with_mode(self.mode)
            .with_fps(self.fps)
            .with_time_mode(self.time_mode)
            .with_target(self.target);
        if self.sort_by_name {
            player = player.sorted_by_name();
        }
        player
            .with_start_frame(self.start_frame)
            .with_autoplay(self.autoplay)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetDef {
    /// Feet position in window pixels.
    pub position: (f32, f32),
    pub idle_clip: String,
    /// Played once when the pet is clicked, then back to idle.
    #[serde(default)]
    pub poke_clip: Option<String>,
    /// Hitbox size, centered horizontally above the feet.
    pub hitbox: (f32, f32),
    #[serde(default)]
    pub blend_shapes: Vec<BlendShape>,
    /// Blend shape driven by the on-screen slider.
    #[serde(default)]
    pub slider_shape: Option<String>,
    /// Prototype taken from the pool on every poke.
    #[serde(default)]
    pub poke_spawn: Option<String>,
}

/// A small overlay animation in window space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDef {
    pub clip: String,
    pub position: (f32, f32),
}

/// A pooled object spawned when the pet is poked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeDef {
    pub name: String,
    pub clip: String,
    /// Seconds before the instance returns to the pool.
    #[serde(default = "default_lifetime")]
    pub lifetime: f32,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PetManifest {
    pub clips: Vec<ClipDef>,
    pub pet: PetDef,
    #[serde(default)]
    pub badge: Option<BadgeDef>,
    #[serde(default)]
    pub prototypes: Vec<PrototypeDef>,
}

impl PetManifest {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let manifest: PetManifest = serde_json::from_str(json)?;
        manifest.check_clip_references();
        Ok(manifest)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest {:?}: {}", path, e))?;
        let manifest = Self::from_json(&json)?;
        info!(
            "Loaded manifest {:?}: {} clips, {} prototypes",
            path,
            manifest.clips.len(),
            manifest.prototypes.len()
        );
        Ok(manifest)
    }

    pub fn clip(&self, name: &str) -> Option<&ClipDef> {
        self.clips.iter().find(|c| c.name == name)
    }

    /// Every texture path used by any clip, without duplicates.
    pub fn texture_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self
            .clips
            .iter()
            .flat_map(|c| c.frames.iter().map(String::as_str))
            .collect();
        paths.sort_unstable();
        paths.dedup();
        paths
    }

    fn check_clip_references(&self) {
        let referenced = std::iter::once(&self.pet.idle_clip)
            .chain(self.pet.poke_clip.iter())
            .chain(self.badge.iter().map(|b| &b.clip))
            .chain(self.prototypes.iter().map(|p| &p.clip));
        for name in referenced {
            if self.clip(name).is_none() {
                warn!("Manifest references unknown clip '{}'", name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "clips": [
            { "name": "idle", "frames": ["b.png", "a.png", "c.png"], "sort_by_name": true },
            { "name": "heart", "frames": ["h.png"], "fps": 8, "mode": "once", "target": "raw_image" }
        ],
        "pet": {
            "position": [200, 380],
            "idle_clip": "idle",
            "hitbox": [120, 160],
            "blend_shapes": [ { "name": "fat", "target_scale": [1.4, 1.0] } ],
            "slider_shape": "fat",
            "poke_spawn": "heart"
        },
        "prototypes": [ { "name": "heart", "clip": "heart" } ]
    }"#;

    #[test]
    fn test_parse_with_defaults() {
        let manifest = PetManifest::from_json(MANIFEST).unwrap();
        let idle = manifest.clip("idle").unwrap();
        assert_eq!(idle.fps, DEFAULT_FPS);
        assert_eq!(idle.mode, PlaybackMode::Loop);
        assert_eq!(idle.target, FrameTarget::Sprite);
        assert!(idle.autoplay);

        let heart = manifest.clip("heart").unwrap();
        assert_eq!(heart.mode, PlaybackMode::Once);
        assert_eq!(heart.target, FrameTarget::RawImage);
        assert_eq!(manifest.prototypes[0].lifetime, DEFAULT_LIFETIME);
        assert_eq!(manifest.pet.blend_shapes[0].weight, 0.0);
        assert!(manifest.badge.is_none());
    }

    #[test]
    fn test_texture_paths_are_unique_and_sorted() {
        let manifest = PetManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.texture_paths(), vec!["a.png", "b.png", "c.png", "h.png"]);
    }

    #[test]
    fn test_build_player_sorts_and_skips_missing() {
        let manifest = PetManifest::from_json(MANIFEST).unwrap();
        let idle = manifest.clip("idle").unwrap();
        let player = idle.build_player(|path| (path != "b.png").then_some((32.0, 32.0)));
        let names: Vec<&str> = player.frames().iter().map(|f| &*f.tex_key).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
        assert!(player.is_playing());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PetManifest::from_json("{ \"clips\": 3 }").is_err());
    }
}
