//! Marks world entities that catch the pointer.
//!
//! Together with a [`BoxCollider`](super::boxcollider::BoxCollider) this is
//! what the click-through ray is cast against.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Interactable {
    /// Layer bits; a ray hits when they intersect its mask.
    pub layers: u32,
    /// Distance from the viewer along the ray.
    pub depth: f32,
}

impl Interactable {
    pub fn new(layers: u32) -> Self {
        Self { layers, depth: 0.0 }
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn on_layer(&self, mask: u32) -> bool {
        self.layers & mask != 0
    }
}
