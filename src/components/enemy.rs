//! Enemy behavior state.
//!
//! Enemies are spawned in a batch at setup and are never despawned: killing
//! one flips [`Enemy::alive`] to `false`, which excludes it from updates,
//! combat, and rendering for the rest of the run.

use bevy_ecs::prelude::Component;

/// Maximum distance (world units) at which an enemy reacts to the player.
pub const AGGRO_RANGE: f32 = 300.0;

/// Chase state of a single enemy.
#[derive(Component, Debug)]
pub struct Enemy {
    pub alive: bool,
    /// Chase speed in world units per second.
    pub speed: f32,
    /// Fixed per-instance movement bias drawn at construction. Kept as an
    /// inert fallback for future wander behavior; chase movement ignores it.
    pub bias: (i8, i8),
}

impl Enemy {
    pub fn new(speed: f32) -> Self {
        Enemy {
            alive: true,
            speed,
            bias: (fastrand::i8(-1..=1), fastrand::i8(-1..=1)),
        }
    }

    /// One-way transition to dead. Dead enemies never come back.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enemy_is_alive_with_unit_bias() {
        let e = Enemy::new(100.0);
        assert!(e.alive);
        assert!((-1..=1).contains(&e.bias.0));
        assert!((-1..=1).contains(&e.bias.1));
    }

    #[test]
    fn kill_is_permanent() {
        let mut e = Enemy::new(100.0);
        e.kill();
        assert!(!e.alive);
        e.kill();
        assert!(!e.alive);
    }
}
