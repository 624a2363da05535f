//! Sequence player notifications.
//!
//! [`sequence_player_system`](crate::systems::sequenceplayer::sequence_player_system)
//! drains the notifications buffered inside each
//! [`SequencePlayer`](crate::components::sequenceplayer::SequencePlayer) and
//! triggers them as the events below, in the order they happened.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<SequenceCompletedEvent>, mut commands: Commands| {
//!     commands.entity(trigger.event().entity).despawn();
//! });
//! ```

use bevy_ecs::prelude::*;

/// A looping sequence wrapped around, or a ping-pong sequence turned.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLoopEvent {
    pub entity: Entity,
}

/// A sequence in `Once` mode reached its last frame and stopped.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCompletedEvent {
    pub entity: Entity,
}

/// The visible frame of a sequence changed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChangedEvent {
    pub entity: Entity,
    /// New frame index.
    pub index: usize,
}
