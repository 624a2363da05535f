//! Input action events.
//!
//! [`InputEvent`] is triggered when one of the pet's key actions is pressed
//! or released. [`PetPokedEvent`] fires when the pointer clicks an
//! interactable entity.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// Logical key actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Raise the slider (default: Up arrow).
    SliderUp,
    /// Lower the slider (default: Down arrow).
    SliderDown,
    /// Pause/resume (default: Space).
    TogglePlayback,
    // Debug toggle has its own event
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// Pressed (true) or released (false).
    pub pressed: bool,
}

/// The pointer clicked an interactable entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct PetPokedEvent {
    pub entity: Entity,
    /// Pointer position in window pixels.
    pub at: Vector2,
}
