//! Debug toggle resource.
//!
//! Present while the debug overlay is on: pet hitboxes, UI rectangles, the
//! playing frame and the click-through state.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
