use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::resources::{ControlMode, MatchState};

/// Drive the right paddle's intent in PvC mode.
///
/// The paddle chases the ball at a reduced speed; a dead zone around the
/// ball's Y keeps it from jittering when already lined up. In PvP the
/// intent is operator-controlled and this system does nothing.
pub fn drive_opponent(world: &mut World, state: &MatchState, config: &Config) {
    if state.mode != ControlMode::PlayerVsAi {
        return;
    }

    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    let chase_speed = config.paddle_speed * config.ai_speed_factor;
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Right {
            continue;
        }
        let center = paddle.center_y(config);
        intent.dy = if center < ball_y - config.ai_dead_zone {
            chase_speed
        } else if center > ball_y + config.ai_dead_zone {
            -chase_speed
        } else {
            0.0
        };
    }
}
