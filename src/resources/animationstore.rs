//! Animation definitions shared across entities.
//!
//! An [`AnimationResource`] describes one horizontal strip of frames inside
//! a sprite-sheet texture. Entities reference a definition by key (e.g.
//! `"player/attack"`); the animation system reads the definition to advance
//! frames and compute the current frame rect.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// One named animation inside a sprite sheet.
#[derive(Debug, Clone)]
pub struct AnimationResource {
    /// Texture the frames live in.
    pub tex_key: String,
    /// Top-left pixel of the first frame.
    pub position: Vector2,
    pub frame_width: f32,
    pub frame_height: f32,
    pub frame_count: usize,
    /// Playback speed in frames per second.
    pub fps: f32,
    pub looped: bool,
}

impl AnimationResource {
    /// Top-left pixel of frame `index` (frames run left to right).
    pub fn frame_offset(&self, index: usize) -> Vector2 {
        Vector2 {
            x: self.position.x + index as f32 * self.frame_width,
            y: self.position.y,
        }
    }

    /// Duration of one full playback in seconds.
    pub fn duration(&self) -> f32 {
        self.frame_count as f32 / self.fps
    }
}

/// Registry of animation definitions by key.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        AnimationStore {
            animations: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}
