//! Time update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, before the schedule runs, applying `time_scale`
//! to the raw frame delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Write the scaled delta and accumulate elapsed simulated seconds.
///
/// `dt` is the unscaled frame delta in seconds. Every timer in the game
/// (attack windows, bomb fuses, the respawn delay) reads the clock this
/// function maintains, so pausing is a matter of zeroing `time_scale`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    let scaled = dt * time.time_scale;
    time.elapsed += scaled;
    time.delta = scaled;
}
