//! Pet configuration resource.
//!
//! Settings loaded from an INI file at startup. Every value has a safe
//! default, so a missing or partial file still yields a working pet.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 400
//! height = 400
//! target_fps = 60
//! vsync = true
//!
//! [desktop]
//! click_through = true
//! check_interval = 0.1
//! interaction_layer = 1
//! ray_distance = 100
//!
//! [pet]
//! manifest = ./assets/pet.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::desktopmode::{
    DEFAULT_CHECK_INTERVAL, DEFAULT_INTERACTION_LAYER, DEFAULT_RAY_DISTANCE,
};

const DEFAULT_WINDOW_WIDTH: u32 = 400;
const DEFAULT_WINDOW_HEIGHT: u32 = 400;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CLICK_THROUGH: bool = true;
const DEFAULT_MANIFEST_PATH: &str = "./assets/pet.json";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct PetConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Restyle the window and toggle click-through. Off for development runs.
    pub click_through: bool,
    /// Seconds between two click-through decisions.
    pub check_interval: f32,
    /// Layer mask the pointer ray tests against.
    pub interaction_layer: u32,
    /// Maximum depth of a pointer ray hit.
    pub ray_distance: f32,
    /// Path to the JSON pet manifest.
    pub manifest_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PetConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            click_through: DEFAULT_CLICK_THROUGH,
            check_interval: DEFAULT_CHECK_INTERVAL,
            interaction_layer: DEFAULT_INTERACTION_LAYER,
            ray_distance: DEFAULT_RAY_DISTANCE,
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [desktop] section
        if let Some(enabled) = config.getbool("desktop", "click_through").ok().flatten() {
            self.click_through = enabled;
        }
        if let Some(interval) = config.getfloat("desktop", "check_interval").ok().flatten() {
            self.check_interval = interval.max(0.0) as f32;
        }
        if let Some(layer) = config.getuint("desktop", "interaction_layer").ok().flatten() {
            self.interaction_layer = layer as u32;
        }
        if let Some(distance) = config.getfloat("desktop", "ray_distance").ok().flatten() {
            self.ray_distance = distance as f32;
        }

        // [pet] section
        if let Some(manifest) = config.get("pet", "manifest") {
            self.manifest_path = PathBuf::from(manifest.trim());
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, click_through={} every {}s, manifest={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.click_through,
            self.check_interval,
            self.manifest_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [desktop] section
        config.set("desktop", "click_through", Some(self.click_through.to_string()));
        config.set("desktop", "check_interval", Some(self.check_interval.to_string()));
        config.set(
            "desktop",
            "interaction_layer",
            Some(self.interaction_layer.to_string()),
        );
        config.set("desktop", "ray_distance", Some(self.ray_distance.to_string()));

        // [pet] section
        config.set(
            "pet",
            "manifest",
            Some(self.manifest_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
