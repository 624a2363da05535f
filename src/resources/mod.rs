//! ECS resources made available to systems.
//!
//! Overview
//! - `cliplibrary` – one template sequence player per manifest clip
//! - `debugmode` – presence toggles the debug overlay
//! - `desktopmode` – click-through timer, hit-test settings and last state
//! - `input` – keyboard and pointer state of the current frame
//! - `objectpool` – reusable entities keyed by prototype
//! - `petconfig` – INI settings
//! - `petmanifest` – JSON description of the pet and its clips
//! - `texturestore` – loaded textures keyed by path
//! - `windowdriver` – non-send handle on the OS window platform
//! - `worldtime` – scaled and unscaled time and delta
pub mod cliplibrary;
pub mod debugmode;
pub mod desktopmode;
pub mod input;
pub mod objectpool;
pub mod petconfig;
pub mod petmanifest;
pub mod texturestore;
pub mod windowdriver;
pub mod worldtime;
