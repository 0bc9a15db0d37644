//! Per-run session counters.
//!
//! Owns the score and the shared enemy-hit cooldown. Score only ever
//! increases; the win threshold check lives in the combat system, which
//! transitions [`GameState`](crate::resources::gamestate::GameState) when
//! [`WIN_SCORE`] is reached.

use bevy_ecs::prelude::Resource;

/// Kills needed to win the session.
pub const WIN_SCORE: u32 = 100;

/// Minimum simulated seconds between two enemy hits on the player. The
/// cooldown is global across all enemies, capping the damage rate no matter
/// how many enemies overlap the player.
pub const HIT_COOLDOWN: f32 = 1.0;

/// Score and combat timestamps for the current run.
#[derive(Resource, Debug, Default)]
pub struct Session {
    pub score: u32,
    last_enemy_hit: Option<f32>,
}

impl Session {
    /// Count a kill. Returns true when the score reaches [`WIN_SCORE`].
    pub fn record_kill(&mut self) -> bool {
        self.score += 1;
        self.score >= WIN_SCORE
    }

    /// Try to register an enemy hit at simulated time `now`. Returns true
    /// and arms the cooldown if at least [`HIT_COOLDOWN`] seconds passed
    /// since the last registered hit.
    pub fn try_register_hit(&mut self, now: f32) -> bool {
        match self.last_enemy_hit {
            Some(last) if now - last < HIT_COOLDOWN => false,
            _ => {
                self.last_enemy_hit = Some(now);
                true
            }
        }
    }
}
