use std::collections::HashMap;

/// Key identifiers the game inspects
pub const KEY_LEFT_UP: &str = "w";
pub const KEY_LEFT_DOWN: &str = "s";
pub const KEY_RIGHT_UP: &str = "ArrowUp";
pub const KEY_RIGHT_DOWN: &str = "ArrowDown";

/// Last-known held state per key identifier.
///
/// No debouncing; the latest write wins. Keys never written read as
/// released. The client refreshes this from the window's key state once per
/// frame, before the simulation steps.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, key: &str, down: bool) {
        self.pressed.insert(key.to_owned(), down);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }
}
