//! The pet marker.

use bevy_ecs::prelude::Component;

/// The desktop pet itself. Remembers which clips it switches between.
#[derive(Component, Debug, Clone)]
pub struct Pet {
    pub idle_clip: String,
    pub poke_clip: Option<String>,
    /// Pool prototype spawned on each poke.
    pub poke_spawn: Option<String>,
    /// Playing the poke clip; idle resumes when it completes.
    pub poked: bool,
}

impl Pet {
    pub fn new(idle_clip: impl Into<String>) -> Self {
        Self {
            idle_clip: idle_clip.into(),
            poke_clip: None,
            poke_spawn: None,
            poked: false,
        }
    }

    pub fn with_poke_clip(mut self, clip: impl Into<String>) -> Self {
        self.poke_clip = Some(clip.into());
        self
    }

    pub fn with_poke_spawn(mut self, prototype: impl Into<String>) -> Self {
        self.poke_spawn = Some(prototype.into());
        self
    }
}
