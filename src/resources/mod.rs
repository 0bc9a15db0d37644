//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the game-state
//! machine, asset stores, and the script runtime.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `camera2d` – shared 2D camera and world bounds for world/screen transforms
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – coarse session phase (start/running/win)
//! - `input` – per-frame keyboard and mouse state relevant to the game
//! - `level` – read-only tile grid loaded from level/tileset documents
//! - `script` – Lua runtime driving the per-frame user-script hook
//! - `session` – score and the shared enemy-hit cooldown
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod animationstore;
pub mod camera2d;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod script;
pub mod session;
pub mod texturestore;
pub mod worldtime;
