use macroquad::prelude::*;

mod game;
mod input;
mod renderer;
mod ui;

use game::Game;
use game_core::Params;

fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: Params::SURFACE_WIDTH as i32,
        window_height: Params::SURFACE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Exactly one game session, owned here and stepped once per frame
    let seed = macroquad::miniquad::date::now() as u64;
    let mut game = Game::new(seed);

    loop {
        game.frame();
        next_frame().await;
    }
}
