//! Lua frame hook dispatch.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::game::bomb_bundle;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gamestate::GameState;
use crate::resources::script::{FrameContext, ScriptCmd, ScriptRuntime};
use crate::resources::session::Session;

/// Run every registered script `on_frame` hook, then apply the commands the
/// scripts queued.
///
/// Exclusive system: scripts see a snapshot taken before any hook runs, and
/// their commands land all at once afterwards, so script order within a
/// frame cannot produce half-applied state.
pub fn script_frame_system(world: &mut World) {
    let snapshot = {
        let mut players = world.query::<(&Player, &MapPosition)>();
        let Ok((player, pos)) = players.single(world) else {
            return;
        };
        FrameContext {
            player_x: pos.pos.x,
            player_y: pos.pos.y,
            lives: player.lives,
            just_respawned: player.just_respawned,
            score: world.resource::<Session>().score,
            state: world.resource::<GameState>().get().name(),
        }
    };

    let commands = {
        let runtime = world.non_send_resource::<ScriptRuntime>();
        runtime.run_frame(&snapshot);
        runtime.drain_commands()
    };

    for command in commands {
        match command {
            ScriptCmd::SetPlayerPos { x, y } => {
                let mut players = world.query_filtered::<&mut MapPosition, With<Player>>();
                if let Ok(mut pos) = players.single_mut(world) {
                    pos.pos.x = x;
                    pos.pos.y = y;
                }
            }
            ScriptCmd::SpawnBomb { x, y } => {
                let bundle = {
                    let animations = world.resource::<AnimationStore>();
                    bomb_bundle(animations, x, y)
                };
                if let Some(bundle) = bundle {
                    world.spawn(bundle);
                }
            }
        }
    }
}
