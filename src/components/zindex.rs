//! Draw order for sprites and raw images.

use bevy_ecs::prelude::Component;

/// Higher values are drawn later, on top of lower ones. Entities without a
/// `ZIndex` draw as if they had `ZIndex(0)`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
