//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! on the pet window: surfaces that show frames, the players that feed them,
//! hit-testing data and pooling markers.
//!
//! Submodules overview:
//! - [`blendshape`] – scale deformations and the slider that drives one
//! - [`boxcollider`] – axis-aligned hitbox relative to the position
//! - [`interactable`] – layer and depth for the click-through ray
//! - [`pet`] – marker for the pet and the clips it switches between
//! - [`pooled`] – pool membership and pool container markers
//! - [`position`] – window-space pivot of an entity
//! - [`pushself`] – lifetime after which a pooled entity returns to its pool
//! - [`rawimage`] – window-space image surface
//! - [`sequenceplayer`] – flip-book playback of a frame sequence
//! - [`sprite`] – world sprite surface
//! - [`uielement`] – rectangle that blocks the pointer
//! - [`zindex`] – drawing order hint

pub mod blendshape;
pub mod boxcollider;
pub mod interactable;
pub mod pet;
pub mod pooled;
pub mod position;
pub mod pushself;
pub mod rawimage;
pub mod sequenceplayer;
pub mod sprite;
pub mod uielement;
pub mod zindex;
