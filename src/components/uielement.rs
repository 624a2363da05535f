//! Rectangular UI element anchored at its top-left
//! [`Position`](super::position::Position).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct UiElement {
    pub size: Vector2,
    /// Whether the element captures the pointer. Decorative elements leave
    /// it false so the desktop below stays reachable.
    pub blocks_pointer: bool,
}

impl UiElement {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            blocks_pointer: true,
        }
    }

    pub fn decorative(mut self) -> Self {
        self.blocks_pointer = false;
        self
    }

    pub fn contains(&self, position: Vector2, point: Vector2) -> bool {
        point.x >= position.x
            && point.x <= position.x + self.size.x
            && point.y >= position.y
            && point.y <= position.y + self.size.y
    }
}
