//! Window-space position component.
//!
//! The pet window has no camera: one unit is one window pixel, with the
//! origin at the top-left corner. Both world sprites and UI elements use
//! [`Position`] as their pivot.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct Position {
    pub pos: Vector2,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
