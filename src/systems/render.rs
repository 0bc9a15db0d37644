//! The draw pass.
//!
//! Exclusive system: drawing needs the Raylib handle and thread, which live
//! as non-send resources, so the pass takes them out of the world for the
//! duration of the frame and puts them back afterwards. Draw order is
//! terrain, then z-sorted entities, then the HUD and state overlays.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerState};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::{Camera2DRes, WorldBounds, clamp_camera_target};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::level::{Level, TileStore};
use crate::resources::texturestore::TextureStore;

/// Screen position and size of the lives HUD hearts.
const HEART_ORIGIN: (f32, f32) = (10.0, 10.0);
const HEART_STRIDE: f32 = 60.0;
const HEART_SIZE: f32 = 48.0;

/// Render a complete frame from the current world state.
///
/// The camera follows the player, clamped to the level bounds. Dead enemies
/// keep their components but are skipped here, so a kill disappears on the
/// same frame it lands.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
        log::error!("Render pass without a Raylib handle");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<raylib::RaylibThread>() else {
        log::error!("Render pass without a Raylib thread");
        world.insert_non_send_resource(rl);
        return;
    };

    let screen_w = rl.get_screen_width();
    let screen_h = rl.get_screen_height();

    // Follow the player, clamped so the view never leaves the level.
    let player_target = {
        let mut q = world.query_filtered::<&MapPosition, With<Player>>();
        q.single(world).map(|p| p.pos).ok()
    };
    if let Some(target) = player_target {
        let bounds = *world.resource::<WorldBounds>();
        let mut camera = world.resource_mut::<Camera2DRes>();
        let clamped = clamp_camera_target(target, bounds, &camera.0);
        camera.0.target = clamped;
    }
    let camera = world.resource::<Camera2DRes>().0;

    // Collect and z-sort before touching the draw handle.
    let mut to_draw: Vec<(Sprite, Vector2, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Enemy>)>();
        q.iter(world)
            .filter(|(_, _, _, enemy)| enemy.is_none_or(|e| e.alive))
            .map(|(sprite, pos, z, _)| (sprite.clone(), pos.pos, *z))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let player_hud = {
        let mut q = world.query::<&Player>();
        q.single(world).map(|p| (p.lives, p.state)).ok()
    };
    let state = world.resource::<GameState>().get();

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        {
            let mut d2 = d.begin_mode2D(camera);

            draw_terrain(world, &mut d2);

            let textures = world.resource::<TextureStore>();
            for (sprite, pos, _z) in &to_draw {
                if let Some(tex) = textures.get(&sprite.tex_key) {
                    let src = Rectangle {
                        x: sprite.offset.x,
                        y: sprite.offset.y,
                        width: sprite.width,
                        height: sprite.height,
                    };
                    let dest = Rectangle {
                        x: pos.x,
                        y: pos.y,
                        width: sprite.width,
                        height: sprite.height,
                    };
                    d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
                }
            }
        }

        if let Some((lives, player_state)) = player_hud {
            draw_hearts(world, &mut d, lives);
            draw_overlays(&mut d, screen_w, screen_h, state, player_state);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw every occupied terrain cell of every layer, bottom layer first.
fn draw_terrain(world: &World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let level = world.resource::<Level>();
    let tiles = world.resource::<TileStore>();
    let textures = world.resource::<TextureStore>();

    for layer in &level.layers {
        for (col, row, id) in level.cells(layer) {
            let Some(tile) = tiles.get(id) else {
                continue;
            };
            if let Some(tex) = textures.get(&tile.tex_key) {
                d2.draw_texture(
                    tex,
                    (col * level.tile_width) as i32,
                    (row * level.tile_height) as i32,
                    Color::WHITE,
                );
            }
        }
    }
}

/// One heart per remaining life, in screen space.
fn draw_hearts(world: &World, d: &mut RaylibDrawHandle, lives: u32) {
    let textures = world.resource::<TextureStore>();
    let Some(heart) = textures.get("heart") else {
        return;
    };
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: heart.width as f32,
        height: heart.height as f32,
    };
    for i in 0..lives {
        let dest = Rectangle {
            x: HEART_ORIGIN.0 + i as f32 * HEART_STRIDE,
            y: HEART_ORIGIN.1,
            width: HEART_SIZE,
            height: HEART_SIZE,
        };
        d.draw_texture_pro(heart, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

struct OverlayStyle {
    fill: Color,
    text: &'static str,
    text_color: Color,
}

/// Overlay for the current session and player state, if any: the start
/// screen hides the world behind an opaque fill, death and victory only
/// dim it.
fn overlay_style(state: GameStates, player_state: PlayerState) -> Option<OverlayStyle> {
    match state {
        GameStates::Start => Some(OverlayStyle {
            fill: Color::BLACK,
            text: "Press ENTER to start",
            text_color: Color::WHITE,
        }),
        GameStates::Win => Some(OverlayStyle {
            fill: Color::new(0, 0, 0, 150),
            text: "YOU WIN!",
            text_color: Color::GREEN,
        }),
        // Death is a player sub-state; the session stays in Running while
        // the respawn countdown ticks.
        GameStates::Running | GameStates::GameOver => (player_state == PlayerState::GameOver)
            .then_some(OverlayStyle {
                fill: Color::new(0, 0, 0, 150),
                text: "GAME OVER",
                text_color: Color::RED,
            }),
    }
}

fn draw_overlays(
    d: &mut RaylibDrawHandle,
    screen_w: i32,
    screen_h: i32,
    state: GameStates,
    player_state: PlayerState,
) {
    if let Some(style) = overlay_style(state, player_state) {
        d.draw_rectangle(0, 0, screen_w, screen_h, style.fill);
        draw_banner(d, screen_w, screen_h, style.text, style.text_color);
    }
}

fn draw_banner(d: &mut RaylibDrawHandle, screen_w: i32, screen_h: i32, text: &str, color: Color) {
    let font_size = 40;
    let text_w = d.measure_text(text, font_size);
    d.draw_text(
        text,
        (screen_w - text_w) / 2,
        (screen_h - font_size) / 2,
        font_size,
        color,
    );
}
