//! Bomb placement and fuse countdown.

use bevy_ecs::prelude::*;

use crate::components::fuse::Fuse;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::game::bomb_bundle;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::{Camera2DRes, screen_to_world};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// A bomb hurts the player when within this distance on both axes at the
/// moment it expires.
pub const BLAST_RADIUS: f32 = 32.0;

/// Spawn bombs from input: the bomb key drops one at the player's feet, a
/// mouse click drops one at the clicked world position.
pub fn bomb_control(
    player: Query<&MapPosition, With<Player>>,
    input: Res<InputState>,
    animations: Res<AnimationStore>,
    camera: Res<Camera2DRes>,
    mut commands: Commands,
) {
    if input.bomb.just_pressed
        && let Ok(pos) = player.single()
        && let Some(bundle) = bomb_bundle(&animations, pos.pos.x, pos.pos.y)
    {
        commands.spawn(bundle);
    }

    if let Some(click) = input.pointer_click {
        let target = screen_to_world(&camera.0, click);
        if let Some(bundle) = bomb_bundle(&animations, target.x, target.y) {
            commands.spawn(bundle);
        }
    }
}

/// Advance bomb fuses and detonate the expired ones.
///
/// A bomb exists for exactly its fuse lifetime; the blast check against the
/// player happens once, on the frame the fuse expires, right before the
/// entity is despawned. The blast ignores the global bite cooldown but a
/// dead player cannot be hurt again.
pub fn fuse_system(
    mut bombs: Query<(Entity, &mut Fuse, &MapPosition), Without<Player>>,
    mut player: Query<(&mut Player, &MapPosition), Without<Fuse>>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let mut exploded: Vec<(Entity, f32, f32)> = Vec::new();
    for (entity, mut fuse, pos) in bombs.iter_mut() {
        fuse.elapsed += time.delta;
        if fuse.expired() {
            exploded.push((entity, pos.pos.x, pos.pos.y));
        }
    }

    let mut player = player.single_mut().ok();
    for (entity, x, y) in exploded {
        if let Some((player, player_pos)) = player.as_mut() {
            let dx = (player_pos.pos.x - x).abs();
            let dy = (player_pos.pos.y - y).abs();
            if dx < BLAST_RADIUS
                && dy < BLAST_RADIUS
                && player.lose_life(time.elapsed)
            {
                log::info!("Caught in a blast! {} lives left", player.lives);
            }
        }
        commands.entity(entity).try_despawn();
    }
}
