//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard from Raylib each frame and
//!   writes [`InputState`]. Key presses are re-emitted as [`InputEvent`]s and
//!   F11 toggles debug via [`SwitchDebugEvent`].
//! - [`update_pointer_state`] copies the mouse into [`PointerState`].
//! - [`track_os_cursor`] then overrides the position with the cursor the
//!   window platform reads from the OS, which keeps moving while the window
//!   is click-through and raylib sees no mouse events.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState, PointerState};
use crate::resources::windowdriver::WindowDriver;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let mut poll = |state: &mut BoolState, action: Option<InputAction>| {
        let key: KeyboardKey = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
        state.just_released = rl.is_key_released(key);
        if let Some(action) = action {
            if state.just_pressed {
                commands.trigger(InputEvent {
                    action,
                    pressed: true,
                });
            }
            if state.just_released {
                commands.trigger(InputEvent {
                    action,
                    pressed: false,
                });
            }
        }
    };

    poll(&mut input.slider_up, Some(InputAction::SliderUp));
    poll(&mut input.slider_down, Some(InputAction::SliderDown));
    poll(&mut input.toggle_playback, Some(InputAction::TogglePlayback));
    poll(&mut input.mode_debug, None);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

/// Poll Raylib for the mouse and update the `PointerState` resource.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    pointer.position = rl.get_mouse_position();
    pointer.left_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    pointer.left_down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
}

/// Prefer the OS cursor over raylib's last seen mouse position.
pub fn track_os_cursor(mut pointer: ResMut<PointerState>, driver: NonSend<WindowDriver>) {
    if let Some(position) = driver.platform().cursor_position() {
        pointer.position = position;
    }
}
