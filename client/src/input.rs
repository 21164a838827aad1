use game_core::input::{InputState, KEY_LEFT_DOWN, KEY_LEFT_UP, KEY_RIGHT_DOWN, KEY_RIGHT_UP};
use macroquad::prelude::*;

/// Window key bindings to the game's key identifiers
const BINDINGS: [(KeyCode, &str); 4] = [
    (KeyCode::W, KEY_LEFT_UP),
    (KeyCode::S, KEY_LEFT_DOWN),
    (KeyCode::Up, KEY_RIGHT_UP),
    (KeyCode::Down, KEY_RIGHT_DOWN),
];

/// Refresh the held state of every bound key from the window.
///
/// Runs once per frame before the simulation steps, so the step always sees
/// the latest key state.
pub fn poll_keys(input: &mut InputState) {
    for (code, key) in BINDINGS {
        input.set_pressed(key, is_key_down(code));
    }
}
