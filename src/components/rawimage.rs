//! UI raw-image surface.
//!
//! A [`RawImage`] shows a texture in window space with its top-left corner at
//! the entity's [`Position`](super::position::Position). It is drawn after
//! the sprites, on top of the pet.

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::components::sequenceplayer::{Frame, FrameSurface};

#[derive(Component, Clone, Debug, Default)]
pub struct RawImage {
    pub texture: Option<Arc<str>>,
    pub width: f32,
    pub height: f32,
}

impl RawImage {
    pub fn new(texture: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        Self {
            texture: Some(texture.into()),
            width,
            height,
        }
    }
}

impl FrameSurface for RawImage {
    fn shown_frame(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.texture = Some(frame.tex_key.clone());
        self.width = frame.width;
        self.height = frame.height;
    }
}
