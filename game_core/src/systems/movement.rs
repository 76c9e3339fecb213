use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::resources::{ControlMode, ControlState, MatchState};

/// Apply paddle movement from intents (or the mouse) and clamp to the field.
///
/// In PvC with mouse control active, the left paddle's center snaps to the
/// tracked mouse Y instead of integrating its intent.
pub fn move_paddles(
    world: &mut World,
    state: &MatchState,
    control: &ControlState,
    config: &Config,
) {
    let mouse = state.mode == ControlMode::PlayerVsAi && control.mouse_active;

    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if paddle.side == Side::Left && mouse {
            paddle.y = control.mouse_y - config.paddle_height / 2.0;
        } else {
            paddle.y += intent.dy;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move the ball by its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
