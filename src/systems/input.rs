//! Input polling.
//!
//! [`update_input_state`] reads hardware input from Raylib exactly once per
//! frame and writes the results into
//! [`InputState`](crate::resources::input::InputState). Everything else in
//! the frame reads that snapshot, so a key press is seen consistently by all
//! systems.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    }

    poll(&mut input.up, &rl);
    poll(&mut input.down, &rl);
    poll(&mut input.left, &rl);
    poll(&mut input.right, &rl);
    poll(&mut input.attack, &rl);
    poll(&mut input.bomb, &rl);
    poll(&mut input.confirm, &rl);

    input.pointer_click = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        Some(rl.get_mouse_position())
    } else {
        None
    };
}
