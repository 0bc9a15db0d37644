//! Proximity combat: enemy bites and player kills.

use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerState};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;

/// An enemy bites when within this distance on both axes.
pub const BITE_RADIUS: f32 = 32.0;

/// An attacking player kills enemies within this distance on both axes.
pub const KILL_RADIUS: f32 = 48.0;

/// Resolve all proximity interactions between the player and living enemies.
///
/// Distance checks are per-axis boxes, not circles, matching the sprite
/// footprints. Bites share one global cooldown in [`Session`], so a crowd
/// of enemies costs at most one life per cooldown window. Kills land only
/// while the attack window is open; the session transitions to the win
/// state on the frame the score reaches [`WIN_SCORE`].
pub fn resolve_combat(
    mut enemies: Query<(&mut Enemy, &MapPosition), Without<Player>>,
    mut player: Query<(&mut Player, &MapPosition), Without<Enemy>>,
    mut session: ResMut<Session>,
    mut state: ResMut<GameState>,
    time: Res<WorldTime>,
) {
    let Ok((mut player, player_pos)) = player.single_mut() else {
        return;
    };

    for (mut enemy, enemy_pos) in enemies.iter_mut() {
        if !enemy.alive {
            continue;
        }

        let dx = (player_pos.pos.x - enemy_pos.pos.x).abs();
        let dy = (player_pos.pos.y - enemy_pos.pos.y).abs();

        if player.state != PlayerState::GameOver
            && dx < BITE_RADIUS
            && dy < BITE_RADIUS
            && session.try_register_hit(time.elapsed)
            && player.lose_life(time.elapsed)
        {
            log::info!("Bitten! {} lives left", player.lives);
        }

        if player.state == PlayerState::Attack && dx < KILL_RADIUS && dy < KILL_RADIUS {
            enemy.kill();
            let won = session.record_kill();
            log::info!("Enemy down, score {}", session.score);
            if won {
                state.set(GameStates::Win);
                log::info!("You win!");
            }
        }
    }
}
