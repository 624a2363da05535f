//! Pet systems.
//!
//! Submodules overview
//! - [`blendshape`] – resolve sliders, apply their values, read slider input
//! - [`desktopmode`] – classify the pointer and toggle click-through
//! - [`input`] – read hardware input into [`crate::resources::input`]
//! - [`pet`] – pokes and the pet's reactions to them
//! - [`pushself`] – return expired pooled entities
//! - [`render`] – draw the pet, images, sliders and the debug overlay
//! - [`sequenceplayer`] – advance players and push frames into surfaces
//! - [`time`] – update simulation time and delta

pub mod blendshape;
pub mod desktopmode;
pub mod input;
pub mod pet;
pub mod pushself;
pub mod render;
pub mod sequenceplayer;
pub mod time;
