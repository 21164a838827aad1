use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
///
/// All geometry is in surface pixels, y growing downward. Positions are the
/// top-left corner of an entity's bounding box.
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_diameter: f32,
    pub ball_serve_speed: f32,
    pub max_bounce_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_diameter: Params::BALL_DIAMETER,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            max_bounce_speed: Params::MAX_BOUNCE_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge, fixed per side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.surface_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.surface_height - self.paddle_height)
    }

    /// Center of the surface
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }
}
