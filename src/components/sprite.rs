//! World sprite surface.
//!
//! A [`Sprite`] draws one whole texture at the entity's
//! [`Position`](super::position::Position). The origin is the pivot in
//! pixels relative to the texture's top-left corner.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::sequenceplayer::{Frame, FrameSurface};

#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: Arc<str>,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2::zero(),
            flip_h: false,
        }
    }

    /// Use the bottom-center of the texture as pivot, so the pet stands on its position.
    pub fn with_feet_origin(mut self) -> Self {
        self.origin = Vector2::new(self.width * 0.5, self.height);
        self
    }

    /// Empty sprite waiting for a [`SequencePlayer`](super::sequenceplayer::SequencePlayer)
    /// to assign its first frame.
    pub fn blank() -> Self {
        Self::new("", 0.0, 0.0)
    }
}

impl FrameSurface for Sprite {
    fn shown_frame(&self) -> Option<&str> {
        (!self.tex_key.is_empty()).then_some(&*self.tex_key)
    }

    fn show_frame(&mut self, frame: &Frame) {
        // keep the pivot at the same relative spot when the frame size changes
        if self.width > 0.0 && self.height > 0.0 {
            self.origin.x *= frame.width / self.width;
            self.origin.y *= frame.height / self.height;
        }
        self.tex_key = frame.tex_key.clone();
        self.width = frame.width;
        self.height = frame.height;
    }
}
