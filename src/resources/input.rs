//! Per-frame input resources.
//!
//! [`InputState`] captures the handful of keys the pet reacts to. Escape is
//! left to raylib's exit key.
//! [`PointerState`] holds the mouse position in window pixels and the left
//! button state, which the click-through classifier and the slider read.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Default::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Keyboard state relevant to the pet.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Toggle the debug overlay (default: F11).
    pub mode_debug: BoolState,
    /// Raise the blend-shape slider (default: Up arrow).
    pub slider_up: BoolState,
    /// Lower the blend-shape slider (default: Down arrow).
    pub slider_down: BoolState,
    /// Pause or resume the pet's animation (default: Space).
    pub toggle_playback: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            slider_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            slider_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            toggle_playback: BoolState::bound_to(KeyboardKey::KEY_SPACE),
        }
    }
}

/// Mouse pointer in window pixel coordinates.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    /// Left button went down this frame.
    pub left_pressed: bool,
    /// Left button is held.
    pub left_down: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            // Off-window until the first poll.
            position: Vector2::new(-1.0, -1.0),
            left_pressed: false,
            left_down: false,
        }
    }
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            ..Default::default()
        }
    }
}
