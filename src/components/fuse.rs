//! Fuse component for transient effects.
//!
//! A [`Fuse`] accumulates simulated time each frame. Once the accumulated
//! time reaches the lifetime the entity counts as expired; the
//! [`fuse_system`](crate::systems::bomb::fuse_system) then removes it with a
//! one-shot blast check against the player. Unlike a plain time-to-live
//! countdown, expiry has a side effect, so removal is owned by the system
//! rather than the component.

use bevy_ecs::prelude::Component;

/// Seconds a bomb burns before it finishes exploding.
pub const BOMB_LIFETIME: f32 = 2.1;

/// Time-limited entity: expires once `elapsed` reaches `lifetime`.
#[derive(Component, Debug)]
pub struct Fuse {
    pub lifetime: f32,
    pub elapsed: f32,
}

impl Fuse {
    pub fn new(lifetime: f32) -> Self {
        Fuse {
            lifetime,
            elapsed: 0.0,
        }
    }

    pub fn expired(&self) -> bool {
        self.elapsed >= self.lifetime
    }
}
