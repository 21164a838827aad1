use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - one per side, x fixed by the side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, always within surface bounds
}

impl Paddle {
    /// Spawn a paddle vertically centered on the surface
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            y: (config.surface_height - config.paddle_height) / 2.0,
        }
    }

    pub fn move_up(&mut self, config: &Config) {
        self.y = config.clamp_paddle_y(self.y - config.paddle_speed);
    }

    pub fn move_down(&mut self, config: &Config) {
        self.y = config.clamp_paddle_y(self.y + config.paddle_speed);
    }

    /// Y of the paddle's vertical center
    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Held-key state for one paddle this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left of the bounding square
    pub vel: Vec2, // px per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Re-center the ball and serve it on a fresh random diagonal.
    ///
    /// Each velocity component is independently +serve_speed or -serve_speed.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.center();
        let speed = config.ball_serve_speed;
        self.vel.x = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel.y = if rng.0.gen_bool(0.5) { speed } else { -speed };
    }

    /// One Euler step (one frame unit) plus top/bottom wall reflection.
    ///
    /// The reflected sign is forced rather than negated, so a ball that is
    /// still out of range on the next frame keeps its corrected direction.
    /// Horizontal exits are scoring, handled by the scoring system.
    pub fn update(&mut self, config: &Config) {
        self.pos += self.vel;

        if self.pos.y <= 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y + config.ball_diameter >= config.surface_height {
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Y of the ball's center
    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_diameter / 2.0
    }
}
