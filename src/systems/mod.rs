//! Per-frame systems, run in a fixed order by the schedule in `main`.
//!
//! - [`time`]: advances the shared clock (called outside the schedule).
//! - [`input`]: polls Raylib into [`InputState`](crate::resources::input::InputState).
//! - [`gamestate`]: start-screen handling and run conditions.
//! - [`player`]: movement, attacking, death and respawn.
//! - [`enemy`]: chase behavior.
//! - [`combat`]: proximity bites and kills.
//! - [`bomb`]: bomb placement and fuse countdown.
//! - [`animation`]: sprite frame advancement.
//! - [`script`]: Lua frame hooks and command application.
//! - [`render`]: the exclusive draw pass.

pub mod animation;
pub mod bomb;
pub mod combat;
pub mod enemy;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod script;
pub mod time;
