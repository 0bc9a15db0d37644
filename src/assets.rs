//! Asset loading: sprite sheets and the tile level.
//!
//! A sprite sheet is a PNG plus a JSON document describing the animation
//! strips inside it:
//!
//! ```json
//! {
//!   "texture": "player.png",
//!   "animations": {
//!     "idle": { "x": 0, "y": 0, "frame_width": 48, "frame_height": 48,
//!               "frames": 6, "fps": 8, "looped": true }
//!   }
//! }
//! ```
//!
//! The level is a Tiled `terrain.tmj` map whose tilesets reference one image
//! file per tile definition.

use std::path::Path;

use raylib::prelude::*;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::level::{Level, LevelDoc, Tile, TileSetDoc, TileStore};
use crate::resources::texturestore::TextureStore;

/// On-disk sprite sheet description.
#[derive(Debug, Deserialize)]
pub struct SheetDoc {
    /// Texture file, relative to the sheet's directory.
    pub texture: String,
    pub animations: FxHashMap<String, SheetAnim>,
}

/// One animation strip inside a sheet.
#[derive(Debug, Deserialize)]
pub struct SheetAnim {
    pub x: f32,
    pub y: f32,
    pub frame_width: f32,
    pub frame_height: f32,
    pub frames: usize,
    pub fps: f32,
    #[serde(default)]
    pub looped: bool,
}

/// Load the sheet `<dir>/<name>.json` plus its texture, registering the
/// texture under `name` and each animation under `"<name>/<anim>"`.
pub fn load_sprite_sheet(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    name: &str,
    textures: &mut TextureStore,
    animations: &mut AnimationStore,
) -> Result<(), String> {
    let doc_path = dir.join(format!("{}.json", name));
    let json = std::fs::read_to_string(&doc_path)
        .map_err(|e| format!("Failed to read sheet {}: {}", doc_path.display(), e))?;
    let doc: SheetDoc = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse sheet {}: {}", doc_path.display(), e))?;

    let tex_path = dir.join(&doc.texture);
    let texture = rl
        .load_texture(thread, &tex_path.to_string_lossy())
        .map_err(|e| format!("Failed to load texture {}: {}", tex_path.display(), e))?;
    textures.insert(name, texture);

    for (anim_name, anim) in doc.animations {
        if anim.frames == 0 || anim.fps <= 0.0 {
            return Err(format!(
                "Bad animation {}/{}: frames and fps must be positive",
                name, anim_name
            ));
        }
        animations.insert(
            format!("{}/{}", name, anim_name),
            AnimationResource {
                tex_key: name.to_string(),
                position: Vector2 {
                    x: anim.x,
                    y: anim.y,
                },
                frame_width: anim.frame_width,
                frame_height: anim.frame_height,
                frame_count: anim.frames,
                fps: anim.fps,
                looped: anim.looped,
            },
        );
    }
    Ok(())
}

/// Load `<dir>/terrain.tmj` and every tileset it references.
///
/// Each tile definition carries its own image file; tile textures are
/// registered under `"tile:<id>"`. A tile whose image fails to load is
/// logged and skipped so one broken asset does not take the level down.
pub fn load_level(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    textures: &mut TextureStore,
    tiles: &mut TileStore,
) -> Result<Level, String> {
    let map_path = dir.join("terrain.tmj");
    let json = std::fs::read_to_string(&map_path)
        .map_err(|e| format!("Failed to read level {}: {}", map_path.display(), e))?;
    let mut doc: LevelDoc = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse level {}: {}", map_path.display(), e))?;

    let tileset_refs = std::mem::take(&mut doc.tilesets);
    let level = doc.validate()?;

    for tileset_ref in &tileset_refs {
        let set_path = dir.join(&tileset_ref.source);
        let json = std::fs::read_to_string(&set_path)
            .map_err(|e| format!("Failed to read tileset {}: {}", set_path.display(), e))?;
        let set: TileSetDoc = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse tileset {}: {}", set_path.display(), e))?;

        for def in set.tiles {
            let image_path = dir.join(&def.image);
            let tex_key = format!("tile:{}", def.id);
            match rl.load_texture(thread, &image_path.to_string_lossy()) {
                Ok(texture) => {
                    let tile = Tile {
                        tex_key: tex_key.clone(),
                        width: def.image_width.unwrap_or(texture.width),
                        height: def.image_height.unwrap_or(texture.height),
                    };
                    textures.insert(tex_key, texture);
                    tiles.insert(def.id, tile);
                }
                Err(e) => {
                    log::warn!("Skipping tile {}: {}", image_path.display(), e);
                }
            }
        }
    }

    log::info!(
        "Loaded level {}x{} tiles, {} layer(s)",
        level.width,
        level.height,
        level.layers.len()
    );
    Ok(level)
}
