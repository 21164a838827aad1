pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::{apply_input, check_collisions, check_scoring, move_ball, move_paddles};

/// Advance the game simulation by one frame.
///
/// While paused this only clears the frame events; the caller's draw pass
/// runs every frame either way, showing a frozen scene.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    run_state: &RunState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    if run_state.is_paused() {
        return;
    }

    // 1. Held keys become paddle intents
    apply_input(world, input);

    // 2. Move paddles, then the ball
    move_paddles(world, config);
    move_ball(world, config, events);

    // 3. Ball vs paddles
    check_collisions(world, config, events);

    // 4. Ball out either side
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity, vertically centered
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity, served from the center
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(config, rng);
    world.spawn((ball,))
}
