use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Events;

/// Apply paddle movement based on intents.
///
/// Up applies before down, so holding both keys nets out except at the clamp
/// boundaries.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.move_up(config);
        }
        if intent.down {
            paddle.move_down(config);
        }
    }
}

/// Advance the ball one frame
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(config);

        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_diameter >= config.surface_height {
            events.ball_hit_wall = true;
        }
    }
}
