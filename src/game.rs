//! World setup and entity bundles.

use std::path::Path;

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::assets::{load_level, load_sprite_sheet};
use crate::components::animation::Animation;
use crate::components::enemy::Enemy;
use crate::components::fuse::{BOMB_LIFETIME, Fuse};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::{Z_EFFECTS, Z_ENEMIES, Z_PLAYER, ZIndex};
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::{Camera2DRes, WorldBounds};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::TileStore;
use crate::resources::script::ScriptRuntime;
use crate::resources::texturestore::TextureStore;
use crate::systems::animation::animation;
use crate::systems::bomb::{bomb_control, fuse_system};
use crate::systems::combat::resolve_combat;
use crate::systems::enemy::enemy_chase;
use crate::systems::gamestate::{start_screen, state_is_running};
use crate::systems::player::player_control;
use crate::systems::script::script_frame_system;

/// Where the player starts and respawns.
pub const PLAYER_SPAWN: Vector2 = Vector2 { x: 100.0, y: 100.0 };

/// Enemies spawned at setup.
pub const ENEMY_COUNT: usize = 100;

/// Enemy chase speed in world units per second.
pub const ENEMY_SPEED: f32 = 100.0;

/// Region enemies spawn in, exclusive upper bounds.
const ENEMY_SPAWN_X: std::ops::Range<i32> = 100..800;
const ENEMY_SPAWN_Y: std::ops::Range<i32> = 100..600;

/// Load all assets, build the camera, and populate the world with the
/// player and the enemy swarm.
///
/// Expects under `assets_dir`: `player.json`, `enemy.json` and `bomb.json`
/// sprite sheets with their textures, `heart.png`, `terrain.tmj` with its
/// tilesets, and optionally a `scripts/` directory.
pub fn setup_world(
    world: &mut World,
    assets_dir: &Path,
    config: &GameConfig,
) -> Result<(), String> {
    let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
        return Err("Raylib handle missing from the world".to_string());
    };
    let Some(thread) = world.remove_non_send_resource::<raylib::RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return Err("Raylib thread missing from the world".to_string());
    };

    let result = load_assets(world, &mut rl, &thread, assets_dir, config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    result
}

fn load_assets(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    config: &GameConfig,
) -> Result<(), String> {
    let mut textures = TextureStore::new();
    let mut animations = AnimationStore::new();
    let mut tiles = TileStore::new();

    for sheet in ["player", "enemy", "bomb"] {
        load_sprite_sheet(rl, thread, assets_dir, sheet, &mut textures, &mut animations)?;
    }

    // The HUD degrades to no hearts rather than failing setup.
    let heart_path = assets_dir.join("heart.png");
    match rl.load_texture(thread, &heart_path.to_string_lossy()) {
        Ok(heart) => textures.insert("heart", heart),
        Err(e) => log::warn!("No heart texture, lives HUD disabled: {}", e),
    }

    let level = load_level(rl, thread, assets_dir, &mut textures, &mut tiles)?;
    let bounds = WorldBounds {
        width: (level.width * level.tile_width) as f32,
        height: (level.height * level.tile_height) as f32,
    };

    let camera = Camera2D {
        target: PLAYER_SPAWN,
        offset: Vector2 {
            x: config.window_width as f32 * 0.5,
            y: config.window_height as f32 * 0.5,
        },
        rotation: 0.0,
        zoom: 1.0,
    };

    world.insert_resource(level);
    world.insert_resource(tiles);
    world.insert_resource(bounds);
    world.insert_resource(Camera2DRes(camera));

    let player_sprite = animations
        .get("player/idle")
        .map(|a| Sprite::centered("player", a.frame_width, a.frame_height))
        .ok_or("Sheet player.json has no idle animation")?;
    world.spawn((
        Player::new(PLAYER_SPAWN, config.starting_lives),
        MapPosition::new(PLAYER_SPAWN.x, PLAYER_SPAWN.y),
        ZIndex(Z_PLAYER),
        player_sprite,
        Animation::new("player/idle"),
    ));

    let enemy_sprite = animations
        .get("enemy/walk")
        .map(|a| Sprite::centered("enemy", a.frame_width, a.frame_height))
        .ok_or("Sheet enemy.json has no walk animation")?;
    for _ in 0..ENEMY_COUNT {
        let x = fastrand::i32(ENEMY_SPAWN_X) as f32;
        let y = fastrand::i32(ENEMY_SPAWN_Y) as f32;
        world.spawn((
            Enemy::new(ENEMY_SPEED),
            MapPosition::new(x, y),
            ZIndex(Z_ENEMIES),
            enemy_sprite.clone(),
            Animation::new("enemy/walk"),
        ));
    }
    log::info!("Spawned {} enemies", ENEMY_COUNT);

    world.insert_resource(textures);
    world.insert_resource(animations);

    let mut scripts =
        ScriptRuntime::new().map_err(|e| format!("Failed to start the script runtime: {}", e))?;
    scripts.load_all(&assets_dir.join("scripts"))?;
    world.insert_non_send_resource(scripts);

    Ok(())
}

/// Build the per-frame simulation schedule.
///
/// The edges pin the frame order: the player moves, then the script hooks
/// run and their commands land, and only after that do bombs spawn, enemies
/// chase and combat resolve. A scripted teleport is therefore visible to
/// everything downstream in the same frame. Blast damage applies after bite
/// resolution, and animation advances last.
pub fn build_sim_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(start_screen);
    schedule.add_systems(player_control.run_if(state_is_running).after(start_screen));
    schedule.add_systems(
        script_frame_system
            .run_if(state_is_running)
            .after(player_control),
    );
    schedule.add_systems(
        bomb_control
            .run_if(state_is_running)
            .after(script_frame_system),
    );
    schedule.add_systems(
        enemy_chase
            .run_if(state_is_running)
            .after(script_frame_system),
    );
    schedule.add_systems(
        resolve_combat
            .run_if(state_is_running)
            .after(script_frame_system)
            .after(enemy_chase),
    );
    schedule.add_systems(
        fuse_system
            .run_if(state_is_running)
            .after(bomb_control)
            .after(resolve_combat),
    );
    schedule.add_systems(animation.after(resolve_combat).after(fuse_system));
    schedule
}

/// Components of a bomb entity at `(x, y)`, or `None` when the explosion
/// animation is not registered.
pub fn bomb_bundle(
    animations: &AnimationStore,
    x: f32,
    y: f32,
) -> Option<(MapPosition, ZIndex, Sprite, Animation, Fuse)> {
    let explode = animations.get("bomb/explode")?;
    Some((
        MapPosition::new(x, y),
        ZIndex(Z_EFFECTS),
        Sprite::centered("bomb", explode.frame_width, explode.frame_height),
        Animation::new("bomb/explode"),
        Fuse::new(BOMB_LIFETIME),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::AnimationResource;

    #[test]
    fn bomb_bundle_requires_the_explosion_animation() {
        let mut animations = AnimationStore::new();
        assert!(bomb_bundle(&animations, 0.0, 0.0).is_none());

        animations.insert(
            "bomb/explode",
            AnimationResource {
                tex_key: "bomb".into(),
                position: Vector2 { x: 0.0, y: 0.0 },
                frame_width: 32.0,
                frame_height: 64.0,
                frame_count: 13,
                fps: 6.2,
                looped: false,
            },
        );
        let (pos, z, sprite, anim, fuse) = bomb_bundle(&animations, 5.0, 7.0).unwrap();
        assert_eq!(pos.pos.x, 5.0);
        assert_eq!(pos.pos.y, 7.0);
        assert_eq!(z.0, Z_EFFECTS);
        assert_eq!(sprite.tex_key, "bomb");
        assert_eq!(anim.animation_key, "bomb/explode");
        assert_eq!(fuse.lifetime, BOMB_LIFETIME);
    }
}
