use bevy_ecs::prelude::Component;

/// Rendering order hint. Entities are drawn lowest-z first, so transient
/// effects sit below the player, and living enemies draw on top.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

/// Z layer for transient effects (bombs).
pub const Z_EFFECTS: i32 = 0;
/// Z layer for the player.
pub const Z_PLAYER: i32 = 1;
/// Z layer for enemies.
pub const Z_ENEMIES: i32 = 2;
