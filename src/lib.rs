//! Wildwood: the runtime core of a top-down action game.
//!
//! A synchronous per-frame simulation drives a single `bevy_ecs` world:
//! input is polled into a resource, free-function systems advance player,
//! enemy, combat and bomb state in a fixed order, and an exclusive render
//! pass draws the tile terrain, the z-sorted sprites, and the HUD through
//! Raylib. Lua scripts can hook into each frame through a restricted
//! command facade.
//!
//! The library surface exists for the integration tests, which build
//! head-less worlds and tick individual systems.

pub mod assets;
pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
