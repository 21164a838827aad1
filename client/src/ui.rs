use game_core::{Config, RunState};
use macroquad::prelude::*;

const BUTTON_WIDTH: f32 = 90.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_MARGIN: f32 = 8.0;
const LABEL_FONT_SIZE: f32 = 20.0;

/// On-canvas play/pause control.
///
/// The label and fill reflect the current run state; a click toggles it.
pub struct PlayPauseButton {
    rect: Rect,
}

impl PlayPauseButton {
    pub fn new(config: &Config) -> Self {
        Self {
            rect: Rect::new(
                (config.surface_width - BUTTON_WIDTH) / 2.0,
                BUTTON_MARGIN,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }

    /// True on the frame the button is clicked
    pub fn clicked(&self) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let (mx, my) = mouse_position();
        self.rect.contains(vec2(mx, my))
    }

    pub fn draw(&self, run_state: &RunState) {
        let (label, fill) = if run_state.is_paused() {
            ("Play", DARKGREEN)
        } else {
            ("Pause", MAROON)
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        let dims = measure_text(label, None, LABEL_FONT_SIZE as u16, 1.0);
        draw_text(
            label,
            self.rect.x + (self.rect.w - dims.width) / 2.0,
            self.rect.y + (self.rect.h + dims.height) / 2.0,
            LABEL_FONT_SIZE,
            WHITE,
        );
    }
}
