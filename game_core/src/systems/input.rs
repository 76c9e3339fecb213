use hecs::World;

use crate::components::{Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::resources::{ControlMode, ControlState, MatchState};

/// Keys the game reacts to; everything else is filtered out upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

/// Raw input event, already translated to field-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseMove(f32),
}

/// Map a raw input event onto paddle intents, mode-dependent.
///
/// Applied at event time rather than queued for the next tick, so held
/// keys stay live across the serve delay. The two schemes are mutually
/// exclusive:
/// - PvC: arrows (or the mouse) drive the left paddle, W/S are ignored.
/// - PvP: W/S drive the left paddle, arrows the right; no mouse control.
pub fn apply_input(
    world: &mut World,
    state: &MatchState,
    control: &mut ControlState,
    config: &Config,
    event: InputEvent,
) {
    match state.mode {
        ControlMode::PlayerVsAi => apply_pvc_input(world, control, config, event),
        ControlMode::PlayerVsPlayer => apply_pvp_input(world, control, config, event),
    }
}

fn apply_pvc_input(
    world: &mut World,
    control: &mut ControlState,
    config: &Config,
    event: InputEvent,
) {
    let speed = config.paddle_speed;
    match event {
        InputEvent::KeyDown(Key::ArrowUp) => {
            set_intent(world, Side::Left, -speed);
            control.mouse_active = false;
        }
        InputEvent::KeyDown(Key::ArrowDown) => {
            set_intent(world, Side::Left, speed);
            control.mouse_active = false;
        }
        InputEvent::KeyUp(Key::ArrowUp) | InputEvent::KeyUp(Key::ArrowDown) => {
            set_intent(world, Side::Left, 0.0);
        }
        InputEvent::MouseMove(y) => {
            control.mouse_y = y;
            control.mouse_active = true;
        }
        _ => {}
    }
}

fn apply_pvp_input(
    world: &mut World,
    control: &mut ControlState,
    config: &Config,
    event: InputEvent,
) {
    let speed = config.paddle_speed;
    match event {
        InputEvent::KeyDown(Key::W) => {
            set_intent(world, Side::Left, -speed);
            control.mouse_active = false;
        }
        InputEvent::KeyDown(Key::S) => {
            set_intent(world, Side::Left, speed);
            control.mouse_active = false;
        }
        InputEvent::KeyDown(Key::ArrowUp) => set_intent(world, Side::Right, -speed),
        InputEvent::KeyDown(Key::ArrowDown) => set_intent(world, Side::Right, speed),
        InputEvent::KeyUp(Key::W) | InputEvent::KeyUp(Key::S) => {
            set_intent(world, Side::Left, 0.0);
        }
        InputEvent::KeyUp(Key::ArrowUp) | InputEvent::KeyUp(Key::ArrowDown) => {
            set_intent(world, Side::Right, 0.0);
        }
        InputEvent::MouseMove(_) => {}
    }
}

/// Write an intent onto the paddle for the given side
pub fn set_intent(world: &mut World, side: Side, dy: f32) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dy = dy;
        }
    }
}
