pub mod components;
pub mod config;
pub mod field;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the Pong simulation one tick (~60 Hz).
///
/// No-op while the match is over or idle, apart from counting down the
/// serve delay. Order of operations: particles age, left paddle, right
/// paddle (AI in PvC), ball, wall bounce, paddle collisions, scoring.
pub fn step(
    world: &mut World,
    state: &mut MatchState,
    score: &mut Score,
    control: &ControlState,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    events.clear();

    if state.game_over {
        return;
    }
    state.tick_serve_delay();
    if !state.running {
        return;
    }

    update_particles(world);
    drive_opponent(world, state, config);
    move_paddles(world, state, control, config);
    move_ball(world);
    bounce_walls(world, events, config);
    collide_paddles(world, events, rng, config);
    check_scoring(world, state, score, events, rng, config);
}

/// Begin (or resume) play. Ignored while the match is over or a serve
/// delay is pending.
pub fn start_match(state: &mut MatchState) {
    if !state.game_over && state.serve_timer == 0 {
        state.running = true;
    }
}

/// Reset the match to its initial state: scores zeroed, paddles and ball
/// recentered, particles cleared, any pending serve resume cancelled.
pub fn reset_match(
    world: &mut World,
    state: &mut MatchState,
    score: &mut Score,
    control: &mut ControlState,
    rng: &mut GameRng,
    config: &Config,
) {
    *score = Score::new();
    state.running = false;
    state.game_over = false;
    state.cancel_serve_delay();
    control.mouse_active = false;

    let start_y = config.paddle_center_start();
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        paddle.y = start_y;
        intent.dy = 0.0;
    }

    let particles: Vec<_> = world
        .query::<&Particle>()
        .iter()
        .map(|(entity, _p)| entity)
        .collect();
    for entity in particles {
        let _ = world.despawn(entity);
    }

    serve_ball(world, rng, config, None);
}

/// Switch the control mode. Always resets the match and drops any mouse
/// control state.
pub fn set_mode(
    world: &mut World,
    state: &mut MatchState,
    score: &mut Score,
    control: &mut ControlState,
    rng: &mut GameRng,
    config: &Config,
    mode: ControlMode,
) {
    state.mode = mode;
    reset_match(world, state, score, control, rng, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles and the ball for a fresh match
pub fn spawn_match(world: &mut World, config: &Config) {
    let start_y = config.paddle_center_start();
    create_paddle(world, Side::Left, start_y);
    create_paddle(world, Side::Right, start_y);
    create_ball(
        world,
        Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
        Vec2::new(config.ball_speed_initial, config.ball_speed_initial),
    );
}
