//! Wildwood main entry point.
//!
//! A top-down action game built with:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//! - **mlua + LuaJIT** for per-frame scripting hooks
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world and its resources
//! 2. Load sprite sheets, the tile level, and the scripts under `assets/`
//! 3. Run the frame loop: poll input, tick the simulation systems in a
//!    fixed order, run script hooks, render
//!
//! The session starts on a start screen, runs until all lives are gone or
//! the score threshold is reached, and respawns the player automatically
//! after each death.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use wildwood::game::{build_sim_schedule, setup_world};
use wildwood::resources::gameconfig::GameConfig;
use wildwood::resources::gamestate::GameState;
use wildwood::resources::input::InputState;
use wildwood::resources::session::Session;
use wildwood::resources::worldtime::WorldTime;
use wildwood::systems::animation::animation;
use wildwood::systems::gamestate::start_screen;
use wildwood::systems::input::update_input_state;
use wildwood::systems::render::render_system;
use wildwood::systems::time::update_world_time;

/// Wildwood, a top-down action game
#[derive(Parser)]
#[command(version, about = "Wildwood, a top-down action game")]
struct Cli {
    /// Directory holding sprite sheets, the level, and scripts.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default configuration: {}", e);
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Wildwood")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(Some(raylib::consts::KeyboardKey::KEY_ESCAPE));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(Session::default());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    setup_world(&mut world, &cli.assets, &config).expect("Failed to set up the game world");
    world.insert_resource(config);

    let mut update = build_sim_schedule();
    update.add_systems(update_input_state.before(start_screen));
    update.add_systems(render_system.after(animation));

    // --------------- Main loop ---------------
    loop {
        let (closing, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.window_should_close(), rl.get_frame_time())
        };
        if closing {
            break;
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }
}
