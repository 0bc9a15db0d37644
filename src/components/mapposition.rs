use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity, used as the pivot for rendering and
/// for all proximity checks.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}
