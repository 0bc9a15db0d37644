//! Enemy chase behavior.

use bevy_ecs::prelude::*;

use crate::components::enemy::{AGGRO_RANGE, Enemy};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerState};
use crate::resources::worldtime::WorldTime;

/// Move every living enemy straight toward the player.
///
/// Enemies are inert until the player comes within [`AGGRO_RANGE`]; once
/// inside, they advance along the direct line at their own speed. The step
/// is clamped to the remaining distance so an enemy lands exactly on the
/// player instead of oscillating past it. A dead player is not chased.
pub fn enemy_chase(
    mut enemies: Query<(&Enemy, &mut MapPosition), Without<Player>>,
    player: Query<(&Player, &MapPosition), Without<Enemy>>,
    time: Res<WorldTime>,
) {
    let Ok((player, player_pos)) = player.single() else {
        return;
    };
    if player.state == PlayerState::GameOver {
        return;
    }

    for (enemy, mut pos) in enemies.iter_mut() {
        if !enemy.alive {
            continue;
        }

        let dx = player_pos.pos.x - pos.pos.x;
        let dy = player_pos.pos.y - pos.pos.y;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq > AGGRO_RANGE * AGGRO_RANGE || dist_sq == 0.0 {
            continue;
        }

        let dist = dist_sq.sqrt();
        let step = (enemy.speed * time.delta).min(dist);
        pos.pos.x += dx / dist * step;
        pos.pos.y += dy / dist * step;
    }
}
