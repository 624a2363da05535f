//! Blend-shape slider systems.
//!
//! - [`resolve_blend_shape_sliders`] looks up the shape index of newly added
//!   sliders. A missing target or shape is reported with `error!` and the
//!   slider stays inert.
//! - [`blend_shape_slider_system`] copies changed slider values into their
//!   target's weights.
//! - [`slider_pointer_system`] and [`slider_key_observer`] feed user input
//!   into the slider value.

use bevy_ecs::prelude::*;
use log::error;

use crate::components::blendshape::{BlendShapeSlider, BlendShapes, MAX_WEIGHT};
use crate::components::position::Position;
use crate::components::uielement::UiElement;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::PointerState;

pub fn resolve_blend_shape_sliders(
    mut sliders: Query<(Entity, &mut BlendShapeSlider), Added<BlendShapeSlider>>,
    shapes: Query<&BlendShapes>,
) {
    for (entity, mut slider) in sliders.iter_mut() {
        let Ok(target) = shapes.get(slider.target) else {
            error!(
                "Slider {:?}: target {:?} has no BlendShapes",
                entity, slider.target
            );
            continue;
        };
        slider.shape_index = target.index_of(&slider.shape_name);
        if slider.shape_index.is_none() {
            error!(
                "Slider {:?}: no blend shape named '{}' on {:?}",
                entity, slider.shape_name, slider.target
            );
        }
    }
}

pub fn blend_shape_slider_system(
    sliders: Query<&BlendShapeSlider, Changed<BlendShapeSlider>>,
    mut shapes: Query<&mut BlendShapes>,
) {
    for slider in sliders.iter() {
        if let Ok(mut target) = shapes.get_mut(slider.target) {
            slider.apply_slider_value(&mut target);
        }
    }
}

/// Slider step for one Up/Down key press.
pub const SLIDER_KEY_STEP: f32 = 10.0;

/// Dragging inside a slider's UI rectangle sets its value from the pointer's
/// horizontal position.
pub fn slider_pointer_system(
    pointer: Res<PointerState>,
    mut sliders: Query<(&Position, &UiElement, &mut BlendShapeSlider)>,
) {
    if !pointer.left_down {
        return;
    }
    for (position, element, mut slider) in sliders.iter_mut() {
        if !element.contains(position.pos, pointer.position) || element.size.x <= 0.0 {
            continue;
        }
        let t = (pointer.position.x - position.pos.x) / element.size.x;
        let value = t * MAX_WEIGHT;
        if (slider.value() - value).abs() > f32::EPSILON {
            slider.set_slider_value(value);
        }
    }
}

/// Up/Down arrows nudge every slider.
pub fn slider_key_observer(trigger: On<InputEvent>, mut sliders: Query<&mut BlendShapeSlider>) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let step = match event.action {
        InputAction::SliderUp => SLIDER_KEY_STEP,
        InputAction::SliderDown => -SLIDER_KEY_STEP,
        _ => return,
    };
    for mut slider in sliders.iter_mut() {
        let value = slider.value() + step;
        slider.set_slider_value(value);
    }
}
