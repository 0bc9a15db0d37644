//! Read-only tile grid loaded from level and tileset documents.
//!
//! A level document names its dimensions, tile pixel size, the tileset
//! documents it references, and one or more layers, each a flat row-major
//! array of stored tile ids. Stored ids are offset by +1 on disk: a stored 0
//! means an empty cell and the effective tile id is `stored - 1`.
//!
//! Parsing accepts both the lowercase spelling written by map editors and
//! the camelCase spelling of hand-edited documents.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Level document as it appears on disk. Dimensions are optional in the
/// format; [`LevelDoc::validate`] turns the document into a usable [`Level`]
/// or a fatal error.
#[derive(Debug, Default, Deserialize)]
pub struct LevelDoc {
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(rename = "tilewidth", alias = "tileWidth")]
    pub tile_width: Option<u32>,
    #[serde(rename = "tileheight", alias = "tileHeight")]
    pub tile_height: Option<u32>,
    #[serde(rename = "tilesets", alias = "tileSets", default)]
    pub tilesets: Vec<TileSetRef>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// Reference from a level document to a tileset document.
#[derive(Debug, Deserialize)]
pub struct TileSetRef {
    pub source: String,
}

/// One full-grid tile layer.
#[derive(Debug, Deserialize)]
pub struct Layer {
    pub width: u32,
    pub data: Vec<u32>,
}

/// Tileset document: maps tile ids to images.
#[derive(Debug, Deserialize)]
pub struct TileSetDoc {
    pub name: String,
    #[serde(default)]
    pub tiles: Vec<TileDef>,
}

/// One tile definition inside a tileset document.
#[derive(Debug, Deserialize)]
pub struct TileDef {
    pub id: u32,
    pub image: String,
    #[serde(rename = "imagewidth", alias = "imageWidth")]
    pub image_width: Option<i32>,
    #[serde(rename = "imageheight", alias = "imageHeight")]
    pub image_height: Option<i32>,
}

impl LevelDoc {
    /// Validate required dimensions and produce the in-memory [`Level`].
    pub fn validate(self) -> Result<Level, String> {
        let width = self.width.ok_or("level is missing its width")?;
        let height = self.height.ok_or("level is missing its height")?;
        let tile_width = self.tile_width.ok_or("level is missing its tile width")?;
        let tile_height = self.tile_height.ok_or("level is missing its tile height")?;
        Ok(Level {
            width,
            height,
            tile_width,
            tile_height,
            layers: self.layers,
        })
    }
}

/// Validated, read-only tile grid for the current level.
#[derive(Resource, Debug)]
pub struct Level {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile pixel width.
    pub tile_width: u32,
    /// Tile pixel height.
    pub tile_height: u32,
    pub layers: Vec<Layer>,
}

impl Level {
    /// Iterate the occupied cells of a layer in row-major order, yielding
    /// `(column, row, effective_tile_id)`. Cells storing 0 are empty and
    /// skipped; stored ids are shifted down by one.
    pub fn cells<'a>(&'a self, layer: &'a Layer) -> impl Iterator<Item = (u32, u32, u32)> + 'a {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| {
                let index = (row * layer.width + col) as usize;
                match layer.data.get(index) {
                    Some(&stored) if stored > 0 => Some((col, row, stored - 1)),
                    _ => None,
                }
            })
        })
    }
}

/// A renderable terrain tile: texture key plus pixel size.
#[derive(Debug, Clone)]
pub struct Tile {
    pub tex_key: String,
    pub width: i32,
    pub height: i32,
}

/// Registry of terrain tiles by effective tile id.
#[derive(Resource, Debug, Default)]
pub struct TileStore {
    map: FxHashMap<u32, Tile>,
}

impl TileStore {
    pub fn new() -> Self {
        TileStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: u32, tile: Tile) {
        self.map.insert(id, tile);
    }

    pub fn get(&self, id: u32) -> Option<&Tile> {
        self.map.get(&id)
    }
}
