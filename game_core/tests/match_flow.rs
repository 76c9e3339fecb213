use game_core::systems::{apply_input, particle_count, InputEvent, Key};
use game_core::*;
use glam::Vec2;
use hecs::World;

struct Harness {
    world: World,
    state: MatchState,
    score: Score,
    control: ControlState,
    events: Events,
    rng: GameRng,
    config: Config,
}

impl Harness {
    fn new() -> Self {
        let config = Config::new();
        let mut world = World::new();
        spawn_match(&mut world, &config);
        Self {
            world,
            state: MatchState::new(),
            score: Score::new(),
            control: ControlState::new(),
            events: Events::new(),
            rng: GameRng::new(12345),
            config,
        }
    }

    fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.state,
            &mut self.score,
            &self.control,
            &mut self.events,
            &mut self.rng,
            &self.config,
        );
    }

    fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }
}

#[test]
fn test_idle_match_does_not_advance() {
    let mut h = Harness::new();
    let before = h.ball().pos;

    h.step();

    assert_eq!(h.ball().pos, before, "Ball frozen until the match starts");
}

#[test]
fn test_started_match_advances_ball() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    let before = h.ball().pos;

    h.step();

    assert_ne!(h.ball().pos, before);
}

#[test]
fn test_paddles_stay_in_bounds_over_a_long_rally() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    apply_input(
        &mut h.world,
        &h.state,
        &mut h.control,
        &h.config,
        InputEvent::KeyDown(Key::ArrowDown),
    );

    for _ in 0..600 {
        h.step();
        for side in [Side::Left, Side::Right] {
            let y = h.paddle_y(side);
            assert!(y >= 0.0 && y <= h.config.field_height - h.config.paddle_height);
        }
    }
}

#[test]
fn test_goal_then_serve_delay_resumes_play() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    h.set_ball(Vec2::new(-1.0, 250.0), Vec2::new(-5.0, 0.0));

    h.step();
    assert_eq!(h.score.right, 1);
    assert!(!h.state.running, "Serve delay suspends play");

    for _ in 0..h.config.serve_delay_ticks {
        assert!(!h.state.running);
        h.step();
    }
    assert!(h.state.running, "Play resumes once the delay elapses");
}

#[test]
fn test_reset_during_serve_delay_stays_stopped() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    h.set_ball(Vec2::new(-1.0, 250.0), Vec2::new(-5.0, 0.0));
    h.step();
    assert!(h.state.serve_timer > 0);

    reset_match(
        &mut h.world,
        &mut h.state,
        &mut h.score,
        &mut h.control,
        &mut h.rng,
        &h.config,
    );

    // The pending serve resume must not fire after a reset
    for _ in 0..h.config.serve_delay_ticks * 2 {
        h.step();
        assert!(!h.state.running);
    }
    assert_eq!(h.score.right, 0);
}

#[test]
fn test_game_over_is_terminal_until_reset() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    h.score.left = 9;
    h.set_ball(
        Vec2::new(h.config.field_width + 1.0, 250.0),
        Vec2::new(5.0, 0.0),
    );

    h.step();
    assert!(h.state.game_over);
    assert!(!h.state.running);
    assert_eq!(h.score.winner(h.config.win_score), Some(Side::Left));

    // Further steps are no-ops; starting is refused
    start_match(&mut h.state);
    assert!(!h.state.running);
    let frozen = h.ball();
    for _ in 0..100 {
        h.step();
    }
    assert_eq!(h.ball().pos, frozen.pos);
    assert_eq!(h.score.left, 10, "No score changes after game over");

    reset_match(
        &mut h.world,
        &mut h.state,
        &mut h.score,
        &mut h.control,
        &mut h.rng,
        &h.config,
    );
    assert!(!h.state.game_over);
    assert_eq!(h.score.left, 0);
}

#[test]
fn test_mode_switch_resets_match() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    h.score.left = 3;
    h.score.right = 7;
    apply_input(
        &mut h.world,
        &h.state,
        &mut h.control,
        &h.config,
        InputEvent::MouseMove(40.0),
    );
    h.step();

    set_mode(
        &mut h.world,
        &mut h.state,
        &mut h.score,
        &mut h.control,
        &mut h.rng,
        &h.config,
        ControlMode::PlayerVsPlayer,
    );

    assert_eq!(h.state.mode, ControlMode::PlayerVsPlayer);
    assert_eq!((h.score.left, h.score.right), (0, 0));
    assert!(!h.control.mouse_active, "Mode switch clears control state");
    for side in [Side::Left, Side::Right] {
        assert_eq!(h.paddle_y(side), h.config.paddle_center_start());
    }
    assert_eq!(particle_count(&h.world), 0);
}

#[test]
fn test_rally_grows_ball_speed() {
    let mut h = Harness::new();
    start_match(&mut h.state);

    // Park the ball just left of the right paddle, heading in
    let paddle_x = h.config.paddle_x(Side::Right);
    h.set_ball(
        Vec2::new(paddle_x - h.config.ball_radius - 4.0, 250.0),
        Vec2::new(5.0, 0.0),
    );

    let mut hit = false;
    for _ in 0..5 {
        h.step();
        if h.events.ball_hit_paddle {
            hit = true;
            break;
        }
    }
    assert!(hit, "Ball should reach the right paddle within a few ticks");
    assert_eq!(h.ball().vel.x, -5.25);
    assert_eq!(particle_count(&h.world), 20, "Hit spawns one explosion");
}

#[test]
fn test_wall_bounce_is_energy_neutral() {
    let mut h = Harness::new();
    start_match(&mut h.state);
    h.set_ball(
        Vec2::new(400.0, h.config.ball_radius + 2.0),
        Vec2::new(3.0, -4.0),
    );

    h.step();

    assert!(h.events.ball_hit_wall);
    let ball = h.ball();
    assert_eq!(ball.vel.x, 3.0);
    assert_eq!(ball.vel.y, 4.0, "dy inverted once, magnitude preserved");
}
