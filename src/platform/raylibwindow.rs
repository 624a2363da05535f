//! Window driver built on raylib's window-state flags.
//!
//! Used where no native driver exists. The transparent framebuffer itself
//! must be requested when the window is created (see `main`); this driver
//! handles the flags that can change afterwards.
//!
//! raylib only tracks the mouse through move events, which stop once the
//! window passes input through. The cursor is read from the GLFW build that
//! raylib links instead; GLFW queries the display server directly.

use std::ffi::c_void;

use log::info;
use raylib::ffi;
use raylib::prelude::Vector2;

unsafe extern "C" {
    fn glfwGetCurrentContext() -> *mut c_void;
    fn glfwGetCursorPos(window: *mut c_void, xpos: *mut f64, ypos: *mut f64);
}

use super::WindowPlatform;

#[derive(Debug, Default, Clone, Copy)]
pub struct RaylibPlatform;

impl WindowPlatform for RaylibPlatform {
    fn setup_window(&mut self) {
        // SAFETY: the raylib window is initialised before the driver is created.
        unsafe {
            ffi::SetWindowState(
                ffi::ConfigFlags::FLAG_WINDOW_UNDECORATED as u32
                    | ffi::ConfigFlags::FLAG_WINDOW_TOPMOST as u32,
            );
        }
        info!("Window restyled: undecorated, topmost");
    }

    fn set_click_through(&mut self, enabled: bool) {
        let flag = ffi::ConfigFlags::FLAG_WINDOW_MOUSE_PASSTHROUGH as u32;
        // SAFETY: see setup_window.
        unsafe {
            if enabled {
                ffi::SetWindowState(flag);
            } else {
                ffi::ClearWindowState(flag);
            }
        }
    }

    fn cursor_position(&self) -> Option<Vector2> {
        let (mut x, mut y) = (0.0f64, 0.0f64);
        // SAFETY: the raylib window's context is current on the main thread.
        unsafe {
            let window = glfwGetCurrentContext();
            if window.is_null() {
                return None;
            }
            glfwGetCursorPos(window, &mut x, &mut y);
        }
        Some(Vector2::new(x as f32, y as f32))
    }
}
