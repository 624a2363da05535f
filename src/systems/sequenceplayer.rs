//! Sequence player system.
//!
//! Drives every [`SequencePlayer`] once per frame:
//!
//! 1. Ticks the player with the scaled or unscaled delta from [`WorldTime`],
//!    depending on its [`TimeMode`].
//! 2. Resolves the surface named by its [`FrameTarget`] on the same entity
//!    and flushes the pending frame into it. The surface is looked up every
//!    frame, so sprites or raw images inserted later are picked up.
//! 3. Triggers the buffered notifications as [`FrameChangedEvent`],
//!    [`SequenceLoopEvent`] and [`SequenceCompletedEvent`].
//!
//! A player whose entity lacks the targeted surface keeps its playback
//! state moving but draws nothing; this is reported once with `warn!`.
//!
//! Pooled entities restart their sequence from the start frame each time the
//! pool hands them out.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::rawimage::RawImage;
use crate::components::sequenceplayer::{
    FrameSurface, FrameTarget, PlaybackEvent, SequencePlayer, TimeMode,
};
use crate::components::sprite::Sprite;
use crate::events::pool::PoolActivatedEvent;
use crate::events::sequence::{FrameChangedEvent, SequenceCompletedEvent, SequenceLoopEvent};
use crate::resources::worldtime::WorldTime;

/// Advance sequence players, update their surfaces and emit their events.
pub fn sequence_player_system(
    time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &mut SequencePlayer,
        Option<&mut Sprite>,
        Option<&mut RawImage>,
    )>,
    mut commands: Commands,
) {
    for (entity, mut player, sprite, raw_image) in query.iter_mut() {
        let dt = match player.time_mode {
            TimeMode::Scaled => time.delta,
            TimeMode::Unscaled => time.unscaled_delta,
        };
        player.tick(dt);

        if player.has_pending_apply() {
            let surface: Option<&mut dyn FrameSurface> = match player.target {
                FrameTarget::Sprite => sprite.map(|s| s.into_inner() as &mut dyn FrameSurface),
                FrameTarget::RawImage => {
                    raw_image.map(|r| r.into_inner() as &mut dyn FrameSurface)
                }
            };
            match surface {
                Some(surface) => {
                    player.apply_to(surface);
                    player.missing_surface_reported = false;
                }
                None if !player.missing_surface_reported => {
                    warn!(
                        "Entity {:?} plays a sequence into a {:?} surface it does not have",
                        entity, player.target
                    );
                    player.missing_surface_reported = true;
                }
                None => {}
            }
        }

        for event in player.drain_events() {
            match event {
                PlaybackEvent::FrameChanged(index) => {
                    commands.trigger(FrameChangedEvent { entity, index })
                }
                PlaybackEvent::Looped => commands.trigger(SequenceLoopEvent { entity }),
                PlaybackEvent::Completed => commands.trigger(SequenceCompletedEvent { entity }),
            }
        }
    }
}

/// Rewind the player of an entity the pool just handed out. It resumes only
/// when its clip autoplays.
pub fn restart_pooled_sequence_observer(
    trigger: On<PoolActivatedEvent>,
    mut players: Query<&mut SequencePlayer>,
) {
    if let Ok(mut player) = players.get_mut(trigger.event().entity) {
        player.restart();
    }
}
