use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in world units and an
/// offset if the texture is a spritesheet. The offset selects the current
/// frame from the sheet; the animation system rewrites it every tick.
/// The origin is the pivot (in pixels) relative to the frame's top-left,
/// used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite with the pivot centered on the frame.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
