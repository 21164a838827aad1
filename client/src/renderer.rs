//! Stateless drawing surface adapter: entity state in, primitive draws out.

use game_core::{Ball, Config, Paddle};
use macroquad::prelude::*;

const PADDLE_COLOR: Color = WHITE;
const BALL_COLOR: Color = Color::new(1.0, 0.757, 0.027, 1.0); // amber
const LINE_COLOR: Color = WHITE;
const SCORE_COLOR: Color = GRAY;

const SCORE_FONT_SIZE: f32 = 40.0;
const SCORE_Y: f32 = 50.0;
const DASH_LENGTH: f32 = 10.0;
const LINE_THICKNESS: f32 = 2.0;

pub fn clear() {
    clear_background(BLACK);
}

pub fn draw_paddle(paddle: &Paddle, config: &Config) {
    draw_rectangle(
        config.paddle_x(paddle.side),
        paddle.y,
        config.paddle_width,
        config.paddle_height,
        PADDLE_COLOR,
    );
}

/// Filled circle centered in the ball's bounding square
pub fn draw_ball(ball: &Ball, config: &Config) {
    let radius = config.ball_diameter / 2.0;
    draw_circle(ball.pos.x + radius, ball.pos.y + radius, radius, BALL_COLOR);
}

/// Dashed vertical line at the horizontal midpoint
pub fn draw_center_line(config: &Config) {
    let x = config.surface_width / 2.0;
    let mut y = 0.0;
    while y < config.surface_height {
        let end = (y + DASH_LENGTH).min(config.surface_height);
        draw_line(x, y, x, end, LINE_THICKNESS, LINE_COLOR);
        y += DASH_LENGTH * 2.0;
    }
}

/// Numeric labels centered at the quarter-width positions
pub fn draw_score(left: u32, right: u32, config: &Config) {
    let quarter = config.surface_width / 4.0;
    draw_label(&left.to_string(), quarter);
    draw_label(&right.to_string(), quarter * 3.0);
}

fn draw_label(text: &str, center_x: f32) {
    let dims = measure_text(text, None, SCORE_FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        center_x - dims.width / 2.0,
        SCORE_Y,
        SCORE_FONT_SIZE,
        SCORE_COLOR,
    );
}
