use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// How the right paddle is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    PlayerVsAi,
    PlayerVsPlayer,
}

/// Match lifecycle flags and the serve-delay timer.
///
/// The delay is a tick-counted timer owned here rather than a detached
/// callback, so a reset cancels any pending resume by construction.
/// Invariant: `running` and `serve_timer > 0` are never both true.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub mode: ControlMode,
    pub running: bool,
    pub game_over: bool,
    pub serve_timer: u32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend play until the serve timer elapses
    pub fn begin_serve_delay(&mut self, ticks: u32) {
        self.running = false;
        self.serve_timer = ticks;
    }

    /// Count the serve timer down one tick; returns true on the tick
    /// play resumes.
    pub fn tick_serve_delay(&mut self) -> bool {
        if self.serve_timer == 0 {
            return false;
        }
        self.serve_timer -= 1;
        if self.serve_timer == 0 {
            self.running = true;
            return true;
        }
        false
    }

    /// Cancel any pending serve resume
    pub fn cancel_serve_delay(&mut self) {
        self.serve_timer = 0;
    }
}

/// Mouse-control state for the left paddle (PvC only).
/// The most recent input wins: a mouse move enables tracking, an arrow
/// key press disables it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlState {
    pub mouse_y: f32,
    pub mouse_active: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator for serve angles and particle bursts
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Right);
        }
        assert_eq!(score.winner(10), Some(Side::Right));
        assert_eq!(Score { left: 9, right: 9 }.winner(10), None);
    }

    #[test]
    fn test_serve_delay_countdown() {
        let mut state = MatchState::new();
        state.begin_serve_delay(3);
        assert!(!state.running);

        assert!(!state.tick_serve_delay());
        assert!(!state.tick_serve_delay());
        assert!(state.tick_serve_delay(), "Third tick should resume play");
        assert!(state.running);
        assert_eq!(state.serve_timer, 0);

        // Idle timer is a no-op
        assert!(!state.tick_serve_delay());
    }

    #[test]
    fn test_cancel_serve_delay() {
        let mut state = MatchState::new();
        state.begin_serve_delay(60);
        state.cancel_serve_delay();
        for _ in 0..120 {
            state.tick_serve_delay();
        }
        assert!(!state.running, "Cancelled serve must never resume play");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.ball_hit_paddle = true;
        events.match_over = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.match_over);
    }
}
