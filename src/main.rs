//! deskpet main entry point.
//!
//! An animated pet living in a borderless, transparent, always-on-top window:
//! - **raylib** for the window, input and textures
//! - **bevy_ecs** for entities, systems and events
//! - the **windows** crate for Win32 click-through on Windows
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the JSON pet manifest
//! 2. Open a transparent undecorated window and restyle it for the desktop
//! 3. Run the setup system once: textures, clips, scene, pool prototypes
//! 4. Every frame: input, click-through decision, pokes, sequence playback,
//!    pooled lifetimes, blend-shape sliders, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! RUST_LOG=debug cargo run -- --dev
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod platform;
mod resources;
mod systems;

use crate::events::switchdebug::switch_debug_observer;
use crate::resources::desktopmode::DesktopMode;
use crate::resources::input::{InputState, PointerState};
use crate::resources::objectpool::ObjectPool;
use crate::resources::petconfig::{DEFAULT_CONFIG_PATH, PetConfig};
use crate::resources::petmanifest::PetManifest;
use crate::resources::windowdriver::WindowDriver;
use crate::resources::worldtime::WorldTime;
use crate::systems::blendshape::{
    blend_shape_slider_system, resolve_blend_shape_sliders, slider_key_observer,
    slider_pointer_system,
};
use crate::systems::desktopmode::desktop_mode_system;
use crate::systems::input::{track_os_cursor, update_input_state, update_pointer_state};
use crate::systems::pet::{
    play_poke_clip_observer, poke_system, return_to_idle_observer, spawn_on_poke_observer,
    toggle_playback_observer,
};
use crate::systems::pushself::{push_self_system, reset_push_self_observer};
use crate::systems::render::render_system;
use crate::systems::sequenceplayer::{restart_pooled_sequence_observer, sequence_player_system};
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// A desktop pet
#[derive(Parser)]
#[command(version, about = "An animated pet that lives on your desktop.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Pet manifest, overriding the one named in the config.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Keep a normal window: no restyling and no click-through.
    #[arg(long)]
    dev: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config & manifest ---------------
    let mut config = PetConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(manifest) = cli.manifest {
        config.manifest_path = manifest;
    }
    if cli.dev {
        config.click_through = false;
    }

    let manifest = match PetManifest::load_from_file(&config.manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::error!("Cannot start without a pet: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("deskpet")
        .transparent();
    if config.click_through {
        builder.undecorated();
    }
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // The window exists now, so the native handle can be found.
    let mut driver = if config.click_through {
        WindowDriver(platform::native_platform())
    } else {
        WindowDriver::noop()
    };
    driver.platform_mut().setup_window();
    log::info!(
        "Window {}x{} ready, click-through {}",
        window_width,
        window_height,
        if config.click_through { "enabled" } else { "disabled" }
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(DesktopMode::from_config(&config));
    world.insert_resource(ObjectPool::new());
    world.insert_resource(manifest);
    world.insert_resource(config);
    world.insert_non_send_resource(driver);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(play_poke_clip_observer));
    world.spawn(Observer::new(spawn_on_poke_observer));
    world.spawn(Observer::new(return_to_idle_observer));
    world.spawn(Observer::new(toggle_playback_observer));
    world.spawn(Observer::new(slider_key_observer));
    world.spawn(Observer::new(reset_push_self_observer));
    world.spawn(Observer::new(restart_pooled_sequence_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    if let Err(e) = world.run_system_cached(game::setup) {
        log::error!("Pet setup failed: {}", e);
        std::process::exit(1);
    }

    let mut update = Schedule::default();
    update.add_systems((
        update_input_state,
        (update_pointer_state, track_os_cursor).chain(),
    ));
    update.add_systems(desktop_mode_system.after(track_os_cursor));
    update.add_systems(poke_system.after(track_os_cursor));
    update.add_systems(slider_pointer_system.after(track_os_cursor));
    update.add_systems(sequence_player_system.after(poke_system));
    update.add_systems(push_self_system);
    update.add_systems(
        (resolve_blend_shape_sliders, blend_shape_slider_system)
            .chain()
            .after(slider_pointer_system),
    );
    update.add_systems(
        render_system
            .after(sequence_player_system)
            .after(blend_shape_slider_system)
            .after(desktop_mode_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
}
