//! High-level game state resource.
//!
//! The session moves `Start → Running → Win`. `Win` is terminal: once
//! reached, no further transition is accepted and simulation systems are
//! gated off while rendering keeps showing the win overlay. Player death is
//! not a global transition; it lives in
//! [`PlayerState`](crate::components::player::PlayerState). The `GameOver`
//! variant exists for completeness of the state set but is never entered by
//! the current rules.

use bevy_ecs::prelude::Resource;

/// Discrete coarse phases of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Start,
    Running,
    GameOver,
    Win,
}

impl GameStates {
    /// Stable lowercase name, exposed to scripts.
    pub fn name(&self) -> &'static str {
        match self {
            GameStates::Start => "start",
            GameStates::Running => "running",
            GameStates::GameOver => "game_over",
            GameStates::Win => "win",
        }
    }
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Start`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Start,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Transition to a new state. `Win` is terminal: once entered, further
    /// transitions are ignored.
    pub fn set(&mut self, state: GameStates) {
        if self.current == GameStates::Win {
            return;
        }
        self.current = state;
    }
}
