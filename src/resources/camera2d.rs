//! Shared 2D camera and world bounds.
//!
//! Wraps raylib's [`Camera2D`] so that systems agree on a single
//! world/screen transform. The camera follows the player but is clamped so
//! the view never leaves the level; world-bounds enforcement lives here, not
//! in the player.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

/// Pixel extent of the loaded level (width * tile_width, height * tile_height).
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

/// Clamp a camera target so the visible rectangle stays inside the world
/// bounds. Worlds smaller than the view are centered.
pub fn clamp_camera_target(target: Vector2, bounds: WorldBounds, camera: &Camera2D) -> Vector2 {
    let half_w = camera.offset.x / camera.zoom;
    let half_h = camera.offset.y / camera.zoom;

    fn clamp_axis(t: f32, half: f32, extent: f32) -> f32 {
        if extent <= half * 2.0 {
            extent * 0.5
        } else {
            t.clamp(half, extent - half)
        }
    }

    Vector2 {
        x: clamp_axis(target.x, half_w, bounds.width),
        y: clamp_axis(target.y, half_h, bounds.height),
    }
}

/// Convert a screen-space point (e.g. a mouse click) to world coordinates
/// under the given camera.
pub fn screen_to_world(camera: &Camera2D, point: Vector2) -> Vector2 {
    Vector2 {
        x: (point.x - camera.offset.x) / camera.zoom + camera.target.x,
        y: (point.y - camera.offset.y) / camera.zoom + camera.target.y,
    }
}
