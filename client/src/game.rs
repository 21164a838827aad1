use game_core::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, InputState, Paddle, RunState,
    Score, Side,
};
use hecs::World;
use macroquad::prelude::*;

use crate::input;
use crate::renderer;
use crate::ui::PlayPauseButton;

/// The single game session: entities, resources, and the play/pause control.
pub struct Game {
    world: World,
    config: Config,
    input: InputState,
    run_state: RunState,
    score: Score,
    events: Events,
    rng: GameRng,
    button: PlayPauseButton,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config, &mut rng);

        let button = PlayPauseButton::new(&config);

        Self {
            world,
            config,
            input: InputState::new(),
            run_state: RunState::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            button,
        }
    }

    /// One animation frame: poll input, advance the simulation, draw.
    pub fn frame(&mut self) {
        input::poll_keys(&mut self.input);

        if self.button.clicked() {
            self.run_state.toggle();
            info!(
                "game {}",
                if self.run_state.is_paused() {
                    "paused"
                } else {
                    "running"
                }
            );
        }

        step(
            &mut self.world,
            &self.config,
            &self.input,
            &self.run_state,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.left_scored || self.events.right_scored {
            info!("score: {} - {}", self.score.left, self.score.right);
        }

        self.draw();
    }

    /// Draw pass; runs every frame regardless of pause state.
    fn draw(&self) {
        renderer::clear();
        renderer::draw_center_line(&self.config);
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            renderer::draw_paddle(paddle, &self.config);
        }
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            renderer::draw_ball(ball, &self.config);
        }
        renderer::draw_score(self.score.left, self.score.right, &self.config);
        self.button.draw(&self.run_state);
    }
}
