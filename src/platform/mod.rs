//! OS window plumbing behind a small trait.
//!
//! The desktop pet needs three things from the windowing system: a one-time
//! restyle (no chrome, per-pixel alpha, always on top), a switch that lets
//! pointer input fall through the window to the desktop, and the live cursor
//! position. A click-through window no longer receives mouse-move messages,
//! so the cursor has to be queried from the OS. [`WindowPlatform`] captures
//! exactly that, so the decision logic in
//! [`DesktopMode`](crate::resources::desktopmode::DesktopMode) never touches
//! the OS directly.
//!
//! - [`win32::Win32Platform`] – user32/dwmapi calls (Windows)
//! - [`raylibwindow::RaylibPlatform`] – raylib window-state flags (other targets)
//! - [`NoopPlatform`] – does nothing; development runs and tests

use raylib::prelude::Vector2;

#[cfg(not(target_os = "windows"))]
pub mod raylibwindow;
#[cfg(target_os = "windows")]
pub mod win32;

/// Window capabilities the pet relies on. Calls are fire-and-forget:
/// implementations log failures instead of returning them.
pub trait WindowPlatform {
    /// Strip decorations, enable alpha compositing and keep the window on top.
    fn setup_window(&mut self);
    /// `true` lets pointer input pass through to whatever is below the window.
    fn set_click_through(&mut self, enabled: bool);
    /// Cursor position in window pixels, read from the OS even while input
    /// passes through. `None` when the platform cannot tell.
    fn cursor_position(&self) -> Option<Vector2> {
        None
    }
}

/// Platform that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlatform;

impl WindowPlatform for NoopPlatform {
    fn setup_window(&mut self) {}
    fn set_click_through(&mut self, _enabled: bool) {}
}

/// The platform implementation for the target OS.
///
/// Must be called after the raylib window exists.
pub fn native_platform() -> Box<dyn WindowPlatform> {
    #[cfg(target_os = "windows")]
    {
        Box::new(win32::Win32Platform::from_active_window())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(raylibwindow::RaylibPlatform)
    }
}
