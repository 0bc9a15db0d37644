//! Player control: movement, attacking, death and respawn.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerState};
use crate::resources::animationstore::AnimationStore;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Player movement speed in world units per second.
pub const PLAYER_SPEED: f32 = 128.0;

/// Largest distance the player may cover on one axis in a single frame.
/// Caps the teleport a pathological frame delta would otherwise cause.
pub const MAX_AXIS_STEP: f32 = 48.0;

/// Fallback attack duration when the attack animation is not registered.
const DEFAULT_ATTACK_DURATION: f32 = 0.5;

/// Drive the single player entity from the current input snapshot.
///
/// Order within the frame matters: this runs after input polling and before
/// combat resolution, so an attack started this frame can land this frame.
///
/// - While dead, only the respawn timer is checked. On respawn the player
///   returns to its spawn point with full lives and raises `just_respawned`
///   for one frame.
/// - While attacking, movement is locked until the attack window closes.
/// - Attacks start on the attack key's press edge, and only while at most
///   one direction key is held.
pub fn player_control(
    mut query: Query<(&mut Player, &mut MapPosition, &mut Animation)>,
    input: Res<InputState>,
    animations: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    let Ok((mut player, mut position, mut animation)) = query.single_mut() else {
        return;
    };

    // One-shot flag from the previous frame's respawn.
    player.just_respawned = false;

    if player.state == PlayerState::GameOver {
        if player.ready_to_respawn(time.elapsed) {
            player.respawn();
            position.pos = player.spawn_point;
            animation.activate("player/idle");
            log::info!("Respawned with {} lives", player.lives);
        }
        return;
    }

    if player.state == PlayerState::Attack {
        if time.elapsed >= player.attack_until {
            player.state = PlayerState::Idle;
            animation.activate("player/idle");
        }
        return;
    }

    if input.attack.just_pressed && input.direction_count() <= 1 {
        let duration = animations
            .get("player/attack")
            .map(|a| a.duration())
            .unwrap_or(DEFAULT_ATTACK_DURATION);
        player.state = PlayerState::Attack;
        player.attack_until = time.elapsed + duration;
        animation.activate("player/attack");
        return;
    }

    let step = (PLAYER_SPEED * time.delta).min(MAX_AXIS_STEP);
    let mut delta = Vector2 { x: 0.0, y: 0.0 };
    if input.up.active {
        delta.y -= step;
    }
    if input.down.active {
        delta.y += step;
    }
    if input.left.active {
        delta.x -= step;
    }
    if input.right.active {
        delta.x += step;
    }

    let moving = delta.x != 0.0 || delta.y != 0.0;
    if moving {
        position.pos.x += delta.x;
        position.pos.y += delta.y;
        if player.state != PlayerState::Moving {
            player.state = PlayerState::Moving;
            animation.activate("player/walk");
        }
    } else if player.state != PlayerState::Idle {
        player.state = PlayerState::Idle;
        animation.activate("player/idle");
    }
}
