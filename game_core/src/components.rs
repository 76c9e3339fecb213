use glam::Vec2;

use crate::config::Config;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // player / player 1
    Right, // CPU / player 2
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - `y` is the top edge, clamped to the field
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Vertical movement intent for a paddle, in px per tick.
/// Written by the input mapper (or the AI), integrated by the movement system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dy: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - position is the center
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn recenter(&mut self, config: &Config) {
        self.pos = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);
    }
}

/// RGB color carried by particles (the client turns it into a CSS color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Short-lived explosion particle. Aged every tick by `life -= decay`,
/// despawned once `life <= 0`.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub life: f32,
    pub decay: f32,
}
