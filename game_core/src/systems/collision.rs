use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::Events;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test; boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

fn ball_bounds(ball: &Ball, config: &Config) -> Aabb {
    Aabb::from_top_left(ball.pos, Vec2::splat(config.ball_diameter))
}

fn paddle_bounds(paddle: &Paddle, config: &Config) -> Aabb {
    Aabb::from_top_left(
        Vec2::new(config.paddle_x(paddle.side), paddle.y),
        Vec2::new(config.paddle_width, config.paddle_height),
    )
}

/// AABB test between the ball's bounding square and a paddle's rectangle
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    ball_bounds(ball, config).overlaps(&paddle_bounds(paddle, config))
}

/// Bounce the ball off any paddle it overlaps.
///
/// Paddles are tested left then right, independently. On a hit the ball is
/// repositioned flush against the face it came through, its horizontal
/// velocity is negated, and its vertical velocity becomes proportional to
/// how far from the paddle's center it struck (up to `max_bounce_speed` at
/// the paddle tips).
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle state first so the ball can be mutated freely
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !ball_hits_paddle(ball, paddle, config) {
                continue;
            }

            let paddle_x = config.paddle_x(paddle.side);
            if ball.vel.x < 0.0 {
                ball.pos.x = paddle_x + config.paddle_width;
            } else {
                ball.pos.x = paddle_x - config.ball_diameter;
            }

            ball.vel.x = -ball.vel.x;

            // The ratio is in [-1, 1] for an on-paddle hit
            let offset = (ball.center_y(config) - paddle.center_y(config))
                / (config.paddle_height / 2.0);
            ball.vel.y = offset * config.max_bounce_speed;

            events.ball_hit_paddle = true;
        }
    }
}
