//! Blend shapes and the slider that drives one of them.
//!
//! A 2D pet has no mesh, so a blend shape here deforms the sprite's scale:
//! each shape names a target scale, and its weight (0–100) interpolates
//! between the base size and that target. Weights of several shapes add up.
//!
//! [`BlendShapeSlider`] is the adapter between a UI value and one named
//! shape on another entity. It resolves the shape index once, when added
//! (see [`resolve_blend_shape_sliders`](crate::systems::blendshape::resolve_blend_shape_sliders)).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

pub const MAX_WEIGHT: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendShape {
    pub name: String,
    /// Scale reached at full weight.
    pub target_scale: (f32, f32),
    #[serde(default)]
    pub weight: f32,
}

#[derive(Component, Debug, Clone, Default)]
pub struct BlendShapes {
    pub shapes: Vec<BlendShape>,
}

impl BlendShapes {
    pub fn new(shapes: Vec<BlendShape>) -> Self {
        Self { shapes }
    }

    /// Index of the shape called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.name == name)
    }

    /// Set a weight, clamped to `[0, 100]`. Unknown indices are ignored.
    pub fn set_weight(&mut self, index: usize, weight: f32) {
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.weight = weight.clamp(0.0, MAX_WEIGHT);
        }
    }

    pub fn weight(&self, index: usize) -> Option<f32> {
        self.shapes.get(index).map(|s| s.weight)
    }

    /// Combined scale factor of all shapes.
    pub fn deformation(&self) -> Vector2 {
        self.shapes
            .iter()
            .fold(Vector2::new(1.0, 1.0), |acc, shape| {
                let t = shape.weight / MAX_WEIGHT;
                Vector2::new(
                    acc.x + (shape.target_scale.0 - 1.0) * t,
                    acc.y + (shape.target_scale.1 - 1.0) * t,
                )
            })
    }
}

#[derive(Component, Debug, Clone)]
pub struct BlendShapeSlider {
    /// Entity carrying the [`BlendShapes`].
    pub target: Entity,
    pub shape_name: String,
    /// Resolved index of `shape_name`; `None` leaves the slider inert.
    pub shape_index: Option<usize>,
    value: f32,
}

impl BlendShapeSlider {
    pub fn new(target: Entity, shape_name: impl Into<String>) -> Self {
        Self {
            target,
            shape_name: shape_name.into(),
            shape_index: None,
            value: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// The slider's single setter, meant to be called from UI input.
    pub fn set_slider_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, MAX_WEIGHT);
    }

    /// Write the slider value into `shapes`. Returns false when unresolved.
    pub fn apply_slider_value(&self, shapes: &mut BlendShapes) -> bool {
        match self.shape_index {
            Some(index) => {
                shapes.set_weight(index, self.value);
                true
            }
            None => false,
        }
    }
}
