use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check if the ball left the surface (scoring).
///
/// Both bounds are checked every frame; only one can fire under normal
/// physics. The scorer is the player opposite the exit side, and the ball is
/// re-served from the center.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(config, rng);
        }
        if ball.pos.x > config.surface_width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(12345);
        create_ball(&mut world, &config, &mut rng);
        (world, config, Score::new(), Events::new(), rng)
    }

    fn place_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-2.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored);
        assert_eq!(
            ball_of(&world).pos,
            config.center(),
            "Ball should reset to center after a score"
        );
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_ball(&mut world, Vec2::new(801.0, 200.0), Vec2::new(2.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored);
        assert_eq!(ball_of(&world).pos, config.center());
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_ball(&mut world, config.center(), Vec2::new(2.0, 2.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();

        place_ball(&mut world, Vec2::new(801.0, 200.0), Vec2::new(2.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        events.clear();

        place_ball(&mut world, Vec2::new(801.0, 200.0), Vec2::new(2.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_exactly_on_bound_does_not_score() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-2.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        place_ball(
            &mut world,
            Vec2::new(config.surface_width, 200.0),
            Vec2::new(2.0, 0.0),
        );
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
    }
}
