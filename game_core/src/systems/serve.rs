use hecs::World;
use rand::Rng;

use crate::components::{Ball, Side};
use crate::config::{Config, Params};
use crate::resources::GameRng;

/// Recenter the ball and roll a fresh launch velocity.
///
/// The launch angle is uniform over [-22.5 deg, +22.5 deg]. The horizontal
/// direction keeps the ball's previous sign unless `toward` forces it
/// (after a goal the ball is served back toward the side it left from).
pub fn serve_ball(world: &mut World, rng: &mut GameRng, config: &Config, toward: Option<Side>) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.recenter(config);

        let angle = rng
            .0
            .gen_range(-Params::SERVE_ANGLE_SPREAD..Params::SERVE_ANGLE_SPREAD);
        let dir = match toward {
            Some(Side::Left) => -1.0,
            Some(Side::Right) => 1.0,
            None => ball.vel.x.signum(),
        };
        ball.vel.x = config.ball_speed_initial * dir;
        ball.vel.y = angle.sin() * config.ball_speed_initial;
    }
}
