//! Win32 window driver.
//!
//! Restyles the active window into a borderless popup, extends the DWM frame
//! over the whole client area so the cleared background becomes transparent,
//! and makes it layered. Click-through sets `WS_EX_TRANSPARENT` together with
//! `WS_EX_LAYERED`; a non-layered top-level window still gets hit tests.

use log::{info, warn};
use raylib::prelude::Vector2;
use windows::Win32::Foundation::{COLORREF, HWND, POINT};
use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::Input::KeyboardAndMouse::GetActiveWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetCursorPos, GetWindowLongW, HWND_TOPMOST, LWA_ALPHA,
    SWP_NOMOVE, SWP_NOSIZE, SetLayeredWindowAttributes, SetWindowLongW, SetWindowPos,
    WS_EX_LAYERED, WS_EX_TRANSPARENT, WS_POPUP, WS_VISIBLE,
};

use super::WindowPlatform;

pub struct Win32Platform {
    hwnd: HWND,
}

impl Win32Platform {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Bind to the window that currently has focus: the freshly opened pet window.
    pub fn from_active_window() -> Self {
        // SAFETY: plain query without arguments.
        let hwnd = unsafe { GetActiveWindow() };
        if hwnd.is_invalid() {
            warn!("No active window to drive; window calls will be ignored by the OS");
        }
        Self::new(hwnd)
    }
}

impl WindowPlatform for Win32Platform {
    fn setup_window(&mut self) {
        // -1 extends the glass frame over the whole client area
        let margins = MARGINS {
            cxLeftWidth: -1,
            cxRightWidth: 0,
            cyTopHeight: 0,
            cyBottomHeight: 0,
        };
        // SAFETY: hwnd belongs to this process; margins outlives the call.
        unsafe {
            // popup keeps the window visible but drops border and caption
            SetWindowLongW(self.hwnd, GWL_STYLE, (WS_POPUP | WS_VISIBLE).0 as i32);
            if let Err(e) = DwmExtendFrameIntoClientArea(self.hwnd, &margins) {
                warn!("DwmExtendFrameIntoClientArea failed: {}", e);
            }
            let ex_style = GetWindowLongW(self.hwnd, GWL_EXSTYLE) as u32;
            SetWindowLongW(self.hwnd, GWL_EXSTYLE, (ex_style | WS_EX_LAYERED.0) as i32);
            // full alpha, or the layered window would turn invisible
            if let Err(e) = SetLayeredWindowAttributes(self.hwnd, COLORREF(0), 255, LWA_ALPHA) {
                warn!("SetLayeredWindowAttributes failed: {}", e);
            }
            if let Err(e) = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE,
            ) {
                warn!("SetWindowPos(HWND_TOPMOST) failed: {}", e);
            }
        }
        info!("Window restyled: borderless, transparent, topmost");
    }

    fn set_click_through(&mut self, enabled: bool) {
        // SAFETY: hwnd belongs to this process.
        unsafe {
            let ex_style = GetWindowLongW(self.hwnd, GWL_EXSTYLE) as u32;
            let ex_style = click_through_ex_style(ex_style, enabled);
            SetWindowLongW(self.hwnd, GWL_EXSTYLE, ex_style as i32);
        }
    }

    fn cursor_position(&self) -> Option<Vector2> {
        let mut point = POINT::default();
        // SAFETY: point is a valid out-pointer for both calls.
        unsafe {
            GetCursorPos(&mut point).ok()?;
            if !ScreenToClient(self.hwnd, &mut point).as_bool() {
                return None;
            }
        }
        Some(Vector2::new(point.x as f32, point.y as f32))
    }
}

/// Extended style for the requested click-through state. Disabling clears
/// only `WS_EX_TRANSPARENT`; the window stays layered.
fn click_through_ex_style(ex_style: u32, enabled: bool) -> u32 {
    if enabled {
        ex_style | WS_EX_LAYERED.0 | WS_EX_TRANSPARENT.0
    } else {
        ex_style & !WS_EX_TRANSPARENT.0
    }
}
