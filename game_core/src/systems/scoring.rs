use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, MatchState, Score};
use crate::systems::serve::serve_ball;

/// Check whether the ball left the field and score the goal.
///
/// Exactly one side scores per out-of-bounds event. Reaching the win
/// threshold ends the match; otherwise the serve sequence suspends play
/// for the serve delay and sends the ball back toward the side it left
/// from.
pub fn check_scoring(
    world: &mut World,
    state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let exited = {
        let mut query = world.query::<&Ball>();
        query.iter().next().and_then(|(_e, ball)| {
            if ball.pos.x - config.ball_radius < 0.0 {
                Some(Side::Left)
            } else if ball.pos.x + config.ball_radius > config.field_width {
                Some(Side::Right)
            } else {
                None
            }
        })
    };

    let side = match exited {
        Some(side) => side,
        None => return,
    };

    // The defender on the exited side concedes
    let scorer = side.opposite();
    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    serve_ball(world, rng, config, Some(side));

    if score.winner(config.win_score).is_some() {
        state.game_over = true;
        state.running = false;
        state.cancel_serve_delay();
        events.match_over = true;
    } else {
        state.begin_serve_delay(config.serve_delay_ticks);
    }
}
