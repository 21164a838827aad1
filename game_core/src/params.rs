/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_INSET: f32 = 20.0;

    // Ball
    pub const BALL_DIAMETER: f32 = 15.0;
    pub const BALL_SERVE_SPEED: f32 = 2.0;
    pub const MAX_BOUNCE_SPEED: f32 = 5.0;
}
