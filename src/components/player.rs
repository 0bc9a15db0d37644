//! Player state and lifecycle.
//!
//! Exactly one entity carries a [`Player`] component. It is created at world
//! setup and never despawned; death puts it into the [`PlayerState::GameOver`]
//! sub-state and a respawn resets it in place after [`RESPAWN_DELAY`] seconds
//! of simulated time.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Seconds of simulated time between death and automatic respawn.
pub const RESPAWN_DELAY: f32 = 3.0;

/// Activity sub-state of the player while the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Moving,
    Attack,
    GameOver,
}

/// The player's lives, activity sub-state, and respawn bookkeeping.
#[derive(Component, Debug)]
pub struct Player {
    pub lives: u32,
    pub state: PlayerState,
    /// Where the player starts and where respawns land.
    pub spawn_point: Vector2,
    /// Lives restored on respawn.
    pub starting_lives: u32,
    /// Simulated time at which the last life was lost.
    pub died_at: Option<f32>,
    /// Simulated time at which the current attack ends.
    pub attack_until: f32,
    /// One-shot flag raised on the frame a respawn happens. Cleared by the
    /// player system at the start of the next frame.
    pub just_respawned: bool,
}

impl Player {
    pub fn new(spawn_point: Vector2, starting_lives: u32) -> Self {
        Player {
            lives: starting_lives,
            state: PlayerState::Idle,
            spawn_point,
            starting_lives,
            died_at: None,
            attack_until: 0.0,
            just_respawned: false,
        }
    }

    /// Lose one life at simulated time `now`.
    ///
    /// Lives clamp at zero. Reaching zero transitions to
    /// [`PlayerState::GameOver`] and records the time of death; calls while
    /// already in `GameOver` are no-ops. Returns whether a life was lost.
    pub fn lose_life(&mut self, now: f32) -> bool {
        if self.state == PlayerState::GameOver {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.state = PlayerState::GameOver;
            self.died_at = Some(now);
            log::info!("GAME OVER");
        }
        true
    }

    /// Whether the respawn delay has elapsed since the time of death.
    pub fn ready_to_respawn(&self, now: f32) -> bool {
        self.state == PlayerState::GameOver
            && self
                .died_at
                .is_some_and(|died_at| now - died_at >= RESPAWN_DELAY)
    }

    /// Reset lives and sub-state after death. The caller moves the entity
    /// back to [`Player::spawn_point`].
    pub fn respawn(&mut self) {
        self.lives = self.starting_lives;
        self.state = PlayerState::Idle;
        self.died_at = None;
        self.just_respawned = true;
    }
}
