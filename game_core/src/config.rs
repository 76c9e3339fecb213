use crate::components::{Rgb, Side};
use crate::field::Aabb;
use glam::Vec2;

/// Game tuning parameters for Pong.
/// Velocities are in px per simulation tick (~60 Hz).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 30.0; // distance from the field edge

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_GROWTH: f32 = 1.05; // per paddle hit, uncapped
    pub const BALL_SPIN: f32 = 7.0; // hit position -> vertical velocity

    // Opponent AI
    pub const AI_SPEED_FACTOR: f32 = 0.7;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Match
    pub const WIN_SCORE: u8 = 10;
    pub const SERVE_DELAY_TICKS: u32 = 60; // 1 s at 60 Hz
    pub const SERVE_ANGLE_SPREAD: f32 = std::f32::consts::FRAC_PI_8;

    // Particles
    pub const EXPLOSION_PARTICLES: usize = 20;

    // Hit colors (cyan left, magenta right)
    pub const LEFT_HIT_COLOR: Rgb = Rgb(0x00, 0xff, 0xfc);
    pub const RIGHT_HIT_COLOR: Rgb = Rgb(0xff, 0x00, 0xff);
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_growth: f32,
    pub ball_spin: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
    pub win_score: u8,
    pub serve_delay_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_growth: Params::BALL_SPEED_GROWTH,
            ball_spin: Params::BALL_SPIN,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
            serve_delay_ticks: Params::SERVE_DELAY_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position (left edge) of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Top-edge Y that puts a paddle at the vertical center of the field
    pub fn paddle_center_start(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Collision box for a paddle at the given top-edge Y
    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        let x = self.paddle_x(side);
        Aabb::new(
            Vec2::new(x, y),
            Vec2::new(x + self.paddle_width, y + self.paddle_height),
        )
    }

    /// Collision box for the ball (treated as an axis-aligned square)
    pub fn ball_rect(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(pos, Vec2::splat(self.ball_radius * 2.0))
    }

    /// Explosion color for a paddle hit
    pub fn hit_color(&self, side: Side) -> Rgb {
        match side {
            Side::Left => Params::LEFT_HIT_COLOR,
            Side::Right => Params::RIGHT_HIT_COLOR,
        }
    }
}
