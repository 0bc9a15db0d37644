//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Input is captured
//! exactly once per frame, before any state mutation. Defaults use WASD for
//! movement, Space for attack, B for bombs, and Enter to confirm.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is held down this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        BoolState {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame input state relevant to gameplay:
/// four directional signals, the two action signals, the confirm key, and
/// an optional pointer click in screen coordinates.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    /// Primary action: melee attack.
    pub attack: BoolState,
    /// Secondary action: drop a bomb at the player's position.
    pub bomb: BoolState,
    /// Confirm key, polled on the start screen.
    pub confirm: BoolState,
    /// Screen position of a mouse click this frame, if any.
    pub pointer_click: Option<Vector2>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_W),
            down: BoolState::bound(KeyboardKey::KEY_S),
            left: BoolState::bound(KeyboardKey::KEY_A),
            right: BoolState::bound(KeyboardKey::KEY_D),
            attack: BoolState::bound(KeyboardKey::KEY_SPACE),
            bomb: BoolState::bound(KeyboardKey::KEY_B),
            confirm: BoolState::bound(KeyboardKey::KEY_ENTER),
            pointer_click: None,
        }
    }
}

impl InputState {
    /// Number of directional signals currently active. Attacking is only
    /// allowed while this is at most one.
    pub fn direction_count(&self) -> u32 {
        [&self.up, &self.down, &self.left, &self.right]
            .iter()
            .filter(|d| d.active)
            .count() as u32
    }
}
