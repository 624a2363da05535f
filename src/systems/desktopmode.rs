//! Click-through system.
//!
//! Every `check_interval` seconds of unscaled time, classifies the pointer
//! position and tells the window whether to swallow or pass through input.
//! The hit tests are exposed separately so the poke handler and the tests can
//! reuse them.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::interactable::Interactable;
use crate::components::position::Position;
use crate::components::uielement::UiElement;
use crate::resources::desktopmode::DesktopMode;
use crate::resources::input::PointerState;
use crate::resources::windowdriver::WindowDriver;
use crate::resources::worldtime::WorldTime;

/// True when `point` lies inside a pointer-blocking UI element.
pub fn pointer_over_ui<'a>(
    point: Vector2,
    elements: impl IntoIterator<Item = (&'a Position, &'a UiElement)>,
) -> bool {
    elements
        .into_iter()
        .any(|(position, element)| {
            element.blocks_pointer && element.contains(position.pos, point)
        })
}

/// Nearest interactable hit by a ray through `point`, if any lies on `mask`
/// within `max_distance`.
pub fn pointer_ray_hit<'a>(
    point: Vector2,
    mask: u32,
    max_distance: f32,
    targets: impl IntoIterator<Item = (Entity, &'a Position, &'a BoxCollider, &'a Interactable)>,
) -> Option<Entity> {
    targets
        .into_iter()
        .filter(|(_, _, _, interactable)| {
            interactable.on_layer(mask) && interactable.depth <= max_distance
        })
        .filter(|(_, position, collider, _)| collider.contains_point(position.pos, point))
        .min_by(|a, b| a.3.depth.total_cmp(&b.3.depth))
        .map(|(entity, ..)| entity)
}

/// Decide and apply click-through for the current pointer position.
pub fn desktop_mode_system(
    time: Res<WorldTime>,
    mut mode: ResMut<DesktopMode>,
    pointer: Res<PointerState>,
    ui: Query<(&Position, &UiElement)>,
    targets: Query<(Entity, &Position, &BoxCollider, &Interactable)>,
    mut driver: NonSendMut<WindowDriver>,
) {
    if !mode.enabled {
        return;
    }
    if !mode.poll(time.unscaled_delta) {
        return;
    }

    let point = pointer.position;
    let over_ui = pointer_over_ui(point, ui.iter());
    let clickable = DesktopMode::should_be_clickable(over_ui, || {
        pointer_ray_hit(point, mode.interaction_layer, mode.max_distance, targets.iter()).is_some()
    });
    mode.apply_decision(clickable, driver.platform_mut());
}
