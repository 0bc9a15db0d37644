//! Game state systems and run conditions.

use bevy_ecs::prelude::*;

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::session::WIN_SCORE;

/// Run condition: true while the session is in the running state. Gameplay
/// systems only tick under this condition; the start screen, game-over and
/// win overlays freeze the simulation.
pub fn state_is_running(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Running)
}

/// Leave the start screen when the confirm key is pressed.
pub fn start_screen(input: Res<InputState>, mut state: ResMut<GameState>) {
    if matches!(state.get(), GameStates::Start) && input.confirm.just_pressed {
        state.set(GameStates::Running);
        log::info!("Kill {} enemies to win!", WIN_SCORE);
    }
}
