//! Sequence player integration tests: playback driven through the ECS,
//! surfaces updated on the same entity, and events reaching observers.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test sequence_player_integration
//! ```

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;

use deskpet::components::pooled::Pooled;
use deskpet::components::rawimage::RawImage;
use deskpet::components::sequenceplayer::{
    Frame, FrameTarget, PlaybackMode, SequencePlayer, TimeMode,
};
use deskpet::components::sprite::Sprite;
use deskpet::events::pool::PoolActivatedEvent;
use deskpet::events::sequence::{FrameChangedEvent, SequenceCompletedEvent, SequenceLoopEvent};
use deskpet::resources::worldtime::WorldTime;
use deskpet::systems::sequenceplayer::{
    restart_pooled_sequence_observer, sequence_player_system,
};
use deskpet::systems::time::update_world_time;

fn frames(n: usize) -> Vec<Frame> {
    (0..n)
        .map(|i| Frame::new(format!("walk_{:04}.png", i + 1), 64.0, 64.0))
        .collect()
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(sequence_player_system);
    schedule.run(world);
}

fn shown(world: &World, entity: Entity) -> Option<String> {
    world.get::<Sprite>(entity).map(|s| s.tex_key.to_string())
}

#[test]
fn first_frame_is_applied_on_first_tick() {
    let mut world = make_world();
    let e = world
        .spawn((Sprite::blank(), SequencePlayer::new(frames(3)).with_fps(10)))
        .id();

    tick(&mut world, 0.0);

    assert_eq!(shown(&world, e).as_deref(), Some("walk_0001.png"));
    assert_eq!(world.get::<Sprite>(e).unwrap().width, 64.0);
}

#[test]
fn looping_walk_visits_frames_in_order() {
    let mut world = make_world();
    let e = world
        .spawn((Sprite::blank(), SequencePlayer::new(frames(3)).with_fps(10)))
        .id();

    let loops = Arc::new(Mutex::new(0));
    let loops_clone = loops.clone();
    world.add_observer(move |_trigger: On<SequenceLoopEvent>| {
        *loops_clone.lock().unwrap() += 1;
    });
    world.flush();

    let mut seen = Vec::new();
    for _ in 0..6 {
        tick(&mut world, 0.05);
        seen.push(world.get::<SequencePlayer>(e).unwrap().current_index());
    }

    assert_eq!(seen, vec![0, 1, 1, 2, 2, 0]);
    assert_eq!(shown(&world, e).as_deref(), Some("walk_0001.png"));
    assert_eq!(*loops.lock().unwrap(), 1);
}

#[test]
fn once_mode_completes_exactly_once() {
    let mut world = make_world();
    let e = world
        .spawn((
            Sprite::blank(),
            SequencePlayer::new(frames(3))
                .with_fps(10)
                .with_mode(PlaybackMode::Once),
        ))
        .id();

    let completed = Arc::new(Mutex::new(Vec::new()));
    let completed_clone = completed.clone();
    world.add_observer(move |trigger: On<SequenceCompletedEvent>| {
        completed_clone.lock().unwrap().push(trigger.event().entity);
    });
    world.flush();

    for _ in 0..10 {
        tick(&mut world, 0.1);
    }

    let player = world.get::<SequencePlayer>(e).unwrap();
    assert_eq!(player.current_index(), 2);
    assert!(!player.is_playing());
    assert_eq!(*completed.lock().unwrap(), vec![e]);
    assert_eq!(shown(&world, e).as_deref(), Some("walk_0003.png"));
}

#[test]
fn frame_changed_events_follow_playback() {
    let mut world = make_world();
    let e = world
        .spawn((
            Sprite::blank(),
            SequencePlayer::new(frames(4))
                .with_fps(10)
                .with_mode(PlaybackMode::PingPong),
        ))
        .id();

    let indices = Arc::new(Mutex::new(Vec::new()));
    let indices_clone = indices.clone();
    world.add_observer(move |trigger: On<FrameChangedEvent>| {
        indices_clone.lock().unwrap().push(trigger.event().index);
    });
    world.flush();

    for _ in 0..7 {
        tick(&mut world, 0.1);
    }

    assert_eq!(*indices.lock().unwrap(), vec![1, 2, 3, 2, 1, 0, 1]);
    assert_eq!(world.get::<SequencePlayer>(e).unwrap().current_index(), 1);
}

#[test]
fn unscaled_player_ignores_time_scale() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(0.0));
    let scaled = world
        .spawn((Sprite::blank(), SequencePlayer::new(frames(3)).with_fps(10)))
        .id();
    let unscaled = world
        .spawn((
            Sprite::blank(),
            SequencePlayer::new(frames(3))
                .with_fps(10)
                .with_time_mode(TimeMode::Unscaled),
        ))
        .id();

    tick(&mut world, 0.1);

    assert_eq!(world.get::<SequencePlayer>(scaled).unwrap().current_index(), 0);
    assert_eq!(world.get::<SequencePlayer>(unscaled).unwrap().current_index(), 1);
}

#[test]
fn raw_image_target_updates_only_the_raw_image() {
    let mut world = make_world();
    let e = world
        .spawn((
            Sprite::new("badge_bg.png", 16.0, 16.0),
            RawImage::default(),
            SequencePlayer::new(frames(2))
                .with_fps(10)
                .with_target(FrameTarget::RawImage),
        ))
        .id();

    tick(&mut world, 0.1);

    let image = world.get::<RawImage>(e).unwrap();
    assert_eq!(image.texture.as_deref(), Some("walk_0002.png"));
    assert_eq!(shown(&world, e).as_deref(), Some("badge_bg.png"));
}

#[test]
fn missing_surface_keeps_playback_running() {
    let mut world = make_world();
    let e = world
        .spawn(
            SequencePlayer::new(frames(3))
                .with_fps(10)
                .with_target(FrameTarget::RawImage),
        )
        .id();

    tick(&mut world, 0.1);
    tick(&mut world, 0.1);

    assert_eq!(world.get::<SequencePlayer>(e).unwrap().current_index(), 2);

    // a surface inserted later is picked up on the next frame change
    world.entity_mut(e).insert(RawImage::default());
    tick(&mut world, 0.1);
    assert_eq!(
        world.get::<RawImage>(e).unwrap().texture.as_deref(),
        Some("walk_0001.png")
    );
}

#[test]
fn paused_player_does_not_advance() {
    let mut world = make_world();
    let e = world
        .spawn((Sprite::blank(), SequencePlayer::new(frames(3)).with_fps(10)))
        .id();
    world.get_mut::<SequencePlayer>(e).unwrap().pause();

    for _ in 0..5 {
        tick(&mut world, 0.1);
    }

    assert_eq!(world.get::<SequencePlayer>(e).unwrap().current_index(), 0);
    assert_eq!(shown(&world, e).as_deref(), Some("walk_0001.png"));
}

#[test]
fn pooled_player_restarts_on_activation() {
    let mut world = make_world();
    world.add_observer(restart_pooled_sequence_observer);
    let e = world
        .spawn((
            Pooled {
                key: "heart".to_string(),
            },
            Sprite::blank(),
            SequencePlayer::new(frames(3))
                .with_fps(10)
                .with_mode(PlaybackMode::Once),
        ))
        .id();
    world.flush();

    for _ in 0..5 {
        tick(&mut world, 0.1);
    }
    assert!(!world.get::<SequencePlayer>(e).unwrap().is_playing());

    world.trigger(PoolActivatedEvent { entity: e });
    let player = world.get::<SequencePlayer>(e).unwrap();
    assert!(player.is_playing());
    assert_eq!(player.current_index(), 0);

    tick(&mut world, 0.0);
    assert_eq!(shown(&world, e).as_deref(), Some("walk_0001.png"));
}

#[test]
fn pooled_player_without_autoplay_stays_paused_on_activation() {
    let mut world = make_world();
    world.add_observer(restart_pooled_sequence_observer);
    let e = world
        .spawn((
            Pooled {
                key: "heart".to_string(),
            },
            Sprite::blank(),
            SequencePlayer::new(frames(3))
                .with_fps(10)
                .with_autoplay(false),
        ))
        .id();
    world.flush();

    world.get_mut::<SequencePlayer>(e).unwrap().play();
    tick(&mut world, 0.15);
    assert_eq!(world.get::<SequencePlayer>(e).unwrap().current_index(), 1);

    world.trigger(PoolActivatedEvent { entity: e });
    let player = world.get::<SequencePlayer>(e).unwrap();
    assert!(!player.is_playing());
    assert_eq!(player.current_index(), 0);

    tick(&mut world, 0.5);
    assert_eq!(shown(&world, e).as_deref(), Some("walk_0001.png"));
}
