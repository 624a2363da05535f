//! deskpet library.
//!
//! Exposes the pet's ECS components, resources, systems, events and window
//! platforms for use in integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod platform;
pub mod resources;
pub mod systems;
