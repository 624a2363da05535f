//! Pet reactions.
//!
//! A left click on an interactable triggers [`PetPokedEvent`]. The pet then
//! plays its poke clip once, takes an instance of its poke prototype from the
//! pool next to the pointer, and goes back to idle when the clip completes.
//! Space pauses and resumes the pet's animation.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::interactable::Interactable;
use crate::components::pet::Pet;
use crate::components::position::Position;
use crate::components::sequenceplayer::SequencePlayer;
use crate::components::uielement::UiElement;
use crate::events::input::{InputAction, InputEvent, PetPokedEvent};
use crate::events::sequence::SequenceCompletedEvent;
use crate::resources::cliplibrary::ClipLibrary;
use crate::resources::desktopmode::DesktopMode;
use crate::resources::input::PointerState;
use crate::resources::objectpool::{PrototypeRegistry, pool_get};
use crate::systems::desktopmode::{pointer_over_ui, pointer_ray_hit};

/// Horizontal spread of poke spawns around the pointer.
const SPAWN_SPREAD_X: f32 = 24.0;
/// Spawns appear this far above the pointer, at most.
const SPAWN_RISE: f32 = 32.0;

/// Turn a left click on an interactable into a [`PetPokedEvent`].
pub fn poke_system(
    pointer: Res<PointerState>,
    mode: Res<DesktopMode>,
    ui: Query<(&Position, &UiElement)>,
    targets: Query<(Entity, &Position, &BoxCollider, &Interactable)>,
    mut commands: Commands,
) {
    if !pointer.left_pressed || pointer_over_ui(pointer.position, ui.iter()) {
        return;
    }
    if let Some(entity) = pointer_ray_hit(
        pointer.position,
        mode.interaction_layer,
        mode.max_distance,
        targets.iter(),
    ) {
        commands.trigger(PetPokedEvent {
            entity,
            at: pointer.position,
        });
    }
}

/// Switch a poked pet to its poke clip.
pub fn play_poke_clip_observer(
    trigger: On<PetPokedEvent>,
    mut pets: Query<(&mut Pet, &mut SequencePlayer)>,
    library: Res<ClipLibrary>,
) {
    let Ok((mut pet, mut player)) = pets.get_mut(trigger.event().entity) else {
        return;
    };
    let Some(clip) = pet.poke_clip.as_deref() else {
        return;
    };
    match library.player(clip) {
        Some(poke) => {
            *player = poke;
            pet.poked = true;
        }
        None => warn!("Pet poke clip '{}' is not in the clip library", clip),
    }
}

/// Back to idle once the poke clip is over.
pub fn return_to_idle_observer(
    trigger: On<SequenceCompletedEvent>,
    mut pets: Query<(&mut Pet, &mut SequencePlayer)>,
    library: Res<ClipLibrary>,
) {
    let Ok((mut pet, mut player)) = pets.get_mut(trigger.event().entity) else {
        return;
    };
    if !pet.poked {
        return;
    }
    pet.poked = false;
    match library.player(&pet.idle_clip) {
        Some(idle) => *player = idle,
        None => warn!("Pet idle clip '{}' is not in the clip library", pet.idle_clip),
    }
}

/// Take the pet's poke prototype from the pool and place it near the pointer.
pub fn spawn_on_poke_observer(
    trigger: On<PetPokedEvent>,
    pets: Query<&Pet>,
    registry: Res<PrototypeRegistry>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some(name) = pets.get(event.entity).ok().and_then(|p| p.poke_spawn.as_deref()) else {
        return;
    };
    let Some(prototype) = registry.get(name).cloned() else {
        warn!("No prototype registered as '{}'", name);
        return;
    };
    let at = event.at
        + Vector2::new(
            (fastrand::f32() * 2.0 - 1.0) * SPAWN_SPREAD_X,
            -fastrand::f32() * SPAWN_RISE,
        );
    commands.queue(move |world: &mut World| {
        if let Some(entity) = pool_get(world, &prototype) {
            if let Some(mut position) = world.get_mut::<Position>(entity) {
                position.pos = at;
            }
        }
    });
}

/// Space pauses or resumes the pet.
pub fn toggle_playback_observer(
    trigger: On<InputEvent>,
    mut players: Query<&mut SequencePlayer, With<Pet>>,
) {
    let event = trigger.event();
    if event.action != InputAction::TogglePlayback || !event.pressed {
        return;
    }
    for mut player in players.iter_mut() {
        if player.is_playing() {
            player.pause();
        } else {
            player.play();
        }
    }
}
