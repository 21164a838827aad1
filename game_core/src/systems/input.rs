use hecs::World;

use crate::components::{Paddle, PaddleIntent, Side};
use crate::input::{InputState, KEY_LEFT_DOWN, KEY_LEFT_UP, KEY_RIGHT_DOWN, KEY_RIGHT_UP};

/// Translate held keys into per-paddle movement intents.
///
/// `w`/`s` drive the left paddle, the arrow keys the right one. Both paddles
/// may move in the same frame.
pub fn apply_input(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let (up_key, down_key) = match paddle.side {
            Side::Left => (KEY_LEFT_UP, KEY_LEFT_DOWN),
            Side::Right => (KEY_RIGHT_UP, KEY_RIGHT_DOWN),
        };
        intent.up = input.is_pressed(up_key);
        intent.down = input.is_pressed(down_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    fn intent_of(world: &World, side: Side) -> PaddleIntent {
        let mut query = world.query::<(&Paddle, &PaddleIntent)>();
        query
            .iter()
            .find(|(_e, (p, _i))| p.side == side)
            .map(|(_e, (_p, i))| *i)
            .unwrap()
    }

    #[test]
    fn test_left_paddle_follows_w_and_s() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        let mut input = InputState::new();
        input.set_pressed(KEY_LEFT_UP, true);
        apply_input(&mut world, &input);

        let left = intent_of(&world, Side::Left);
        assert!(left.up && !left.down);
        let right = intent_of(&world, Side::Right);
        assert!(!right.up && !right.down, "Arrow keys were not held");
    }

    #[test]
    fn test_right_paddle_follows_arrows() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        let mut input = InputState::new();
        input.set_pressed(KEY_RIGHT_DOWN, true);
        apply_input(&mut world, &input);

        let right = intent_of(&world, Side::Right);
        assert!(!right.up && right.down);
        let left = intent_of(&world, Side::Left);
        assert!(!left.up && !left.down);
    }

    #[test]
    fn test_released_keys_clear_intents() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);

        let mut input = InputState::new();
        input.set_pressed(KEY_LEFT_UP, true);
        apply_input(&mut world, &input);
        assert!(intent_of(&world, Side::Left).up);

        input.set_pressed(KEY_LEFT_UP, false);
        apply_input(&mut world, &input);
        assert!(!intent_of(&world, Side::Left).up);
    }
}
