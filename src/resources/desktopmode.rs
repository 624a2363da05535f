//! Click-through state for the desktop pet window.
//!
//! The window should swallow pointer input only where there is something to
//! interact with. [`DesktopMode`] keeps the polling timer, the hit-test
//! settings and the click-through flag last sent to the OS.
//!
//! # Decision
//!
//! Evaluated at most once per `check_interval`:
//!
//! 1. Pointer over a blocking UI element: clickable.
//! 2. Otherwise a ray from the viewer through the pointer, limited to
//!    `max_distance`, against entities on `interaction_layer`: a hit means clickable.
//! 3. Otherwise click-through.
//!
//! The OS flag is written only when the decision differs from the last one
//! applied, see [`DesktopMode::apply_decision`].

use bevy_ecs::prelude::*;
use log::debug;

use crate::platform::WindowPlatform;
use crate::resources::petconfig::PetConfig;

pub const DEFAULT_CHECK_INTERVAL: f32 = 0.1;
pub const DEFAULT_RAY_DISTANCE: f32 = 100.0;
pub const DEFAULT_INTERACTION_LAYER: u32 = 1;

#[derive(Resource, Debug, Clone)]
pub struct DesktopMode {
    /// When false the window is never touched (development runs).
    pub enabled: bool,
    /// Seconds between two decisions.
    pub check_interval: f32,
    /// Layer mask the pointer ray tests against.
    pub interaction_layer: u32,
    /// Maximum depth a ray hit may have.
    pub max_distance: f32,
    timer: f32,
    click_through: bool,
}

impl Default for DesktopMode {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopMode {
    pub fn new() -> Self {
        Self {
            enabled: true,
            check_interval: DEFAULT_CHECK_INTERVAL,
            interaction_layer: DEFAULT_INTERACTION_LAYER,
            max_distance: DEFAULT_RAY_DISTANCE,
            timer: 0.0,
            click_through: false,
        }
    }

    pub fn from_config(config: &PetConfig) -> Self {
        Self {
            enabled: config.click_through,
            check_interval: config.check_interval,
            interaction_layer: config.interaction_layer,
            max_distance: config.ray_distance,
            ..Self::new()
        }
    }

    /// Advance the polling timer. Returns true when a decision is due,
    /// restarting the interval.
    pub fn poll(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer >= self.check_interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Whether the window should take pointer input. UI wins: the ray test
    /// only runs when the pointer is not over UI.
    pub fn should_be_clickable(over_ui: bool, ray_hit: impl FnOnce() -> bool) -> bool {
        over_ui || ray_hit()
    }

    /// Push a decision to the OS if it changed. Returns true when the
    /// platform was called.
    pub fn apply_decision(&mut self, clickable: bool, platform: &mut dyn WindowPlatform) -> bool {
        let click_through = !clickable;
        if click_through == self.click_through {
            return false;
        }
        self.click_through = click_through;
        debug!("Click-through {}", if click_through { "on" } else { "off" });
        platform.set_click_through(click_through);
        true
    }

    /// Click-through state last applied to the window.
    pub fn click_through(&self) -> bool {
        self.click_through
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingPlatform {
        calls: Vec<bool>,
    }

    impl WindowPlatform for CountingPlatform {
        fn setup_window(&mut self) {}
        fn set_click_through(&mut self, enabled: bool) {
            self.calls.push(enabled);
        }
    }

    #[test]
    fn test_ui_takes_precedence_over_ray() {
        assert!(DesktopMode::should_be_clickable(true, || false));
        assert!(DesktopMode::should_be_clickable(true, || true));
        assert!(DesktopMode::should_be_clickable(false, || true));
        assert!(!DesktopMode::should_be_clickable(false, || false));
    }

    #[test]
    fn test_ray_not_cast_when_over_ui() {
        let mut cast = false;
        DesktopMode::should_be_clickable(true, || {
            cast = true;
            true
        });
        assert!(!cast);
    }

    #[test]
    fn test_apply_decision_is_edge_triggered() {
        let mut mode = DesktopMode::new();
        let mut platform = CountingPlatform::default();

        for _ in 0..10 {
            mode.apply_decision(false, &mut platform);
        }
        assert_eq!(platform.calls, vec![true]);
        assert!(mode.click_through());

        // starts clickable, so repeating that decision is free
        let mut fresh = DesktopMode::new();
        let mut platform = CountingPlatform::default();
        assert!(!fresh.apply_decision(true, &mut platform));
        assert!(platform.calls.is_empty());
    }

    #[test]
    fn test_apply_decision_follows_every_change() {
        let mut mode = DesktopMode::new();
        let mut platform = CountingPlatform::default();
        for clickable in [false, false, true, true, true, false, true] {
            mode.apply_decision(clickable, &mut platform);
        }
        assert_eq!(platform.calls, vec![true, false, true, false]);
    }

    #[test]
    fn test_poll_waits_for_interval() {
        let mut mode = DesktopMode::new();
        assert!(!mode.poll(0.04));
        assert!(!mode.poll(0.04));
        assert!(mode.poll(0.04));
        // timer restarts from zero
        assert!(!mode.poll(0.04));
        assert!(mode.poll(0.5));
    }
}
