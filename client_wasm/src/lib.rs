//! Canvas-2D browser client for the Pong simulation.
//!
//! The JS glue owns the DOM: it forwards keyboard/mouse events (mouse Y
//! already field-local), drives the requestAnimationFrame loop via
//! [`frame`], and reads the score getters each frame. All game state
//! lives in `game_core`.

#![cfg(target_arch = "wasm32")]

mod render;

use game_core::systems::{apply_input, InputEvent, Key};
use game_core::{
    reset_match, set_mode, spawn_match, start_match, step, Config, ControlMode, ControlState,
    Events, GameRng, MatchState, Score, Side,
};
use hecs::World;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Main client state
pub struct Client {
    world: World,
    state: MatchState,
    score: Score,
    control: ControlState,
    events: Events,
    rng: GameRng,
    config: Config,
    ctx: CanvasRenderingContext2d,
}

impl Client {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let config = Config::new();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut world = World::new();
        spawn_match(&mut world, &config);

        let mut client = Self {
            world,
            state: MatchState::new(),
            score: Score::new(),
            control: ControlState::new(),
            events: Events::new(),
            rng: GameRng::new(js_sys::Date::now() as u64),
            config,
            ctx,
        };
        client.reset();
        Ok(client)
    }

    /// Advance one tick and repaint
    pub fn frame(&mut self) -> Result<(), JsValue> {
        step(
            &mut self.world,
            &mut self.state,
            &mut self.score,
            &self.control,
            &mut self.events,
            &mut self.rng,
            &self.config,
        );
        render::draw(
            &self.ctx,
            &self.world,
            &self.state,
            &self.score,
            &self.config,
        )
    }

    pub fn key_down(&mut self, key: &str) {
        if let Some(key) = parse_key(key) {
            self.input(InputEvent::KeyDown(key));
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = parse_key(key) {
            self.input(InputEvent::KeyUp(key));
        }
    }

    pub fn mouse_move(&mut self, y: f32) {
        self.input(InputEvent::MouseMove(y));
    }

    fn input(&mut self, event: InputEvent) {
        apply_input(
            &mut self.world,
            &self.state,
            &mut self.control,
            &self.config,
            event,
        );
    }

    pub fn start(&mut self) {
        start_match(&mut self.state);
    }

    pub fn reset(&mut self) {
        reset_match(
            &mut self.world,
            &mut self.state,
            &mut self.score,
            &mut self.control,
            &mut self.rng,
            &self.config,
        );
    }

    pub fn switch_mode(&mut self, mode: ControlMode) {
        set_mode(
            &mut self.world,
            &mut self.state,
            &mut self.score,
            &mut self.control,
            &mut self.rng,
            &self.config,
            mode,
        );
    }
}

/// Translate a DOM `KeyboardEvent.key` value. Unbound keys are dropped
/// here so the core only ever sees its own vocabulary.
fn parse_key(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowUp" => Some(Key::ArrowUp),
        "ArrowDown" => Some(Key::ArrowDown),
        _ => None,
    }
}

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    unsafe {
        match CLIENT {
            Some(ref mut client) => Ok(f(client)),
            None => Err(JsValue::from_str("Client not initialized")),
        }
    }
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let client = Client::new(canvas)?;
    unsafe {
        CLIENT = Some(client);
    }
    web_sys::console::log_1(&"pong client initialized".into());
    Ok(())
}

#[wasm_bindgen]
pub fn frame() -> Result<(), JsValue> {
    with_client(|client| client.frame())?
}

#[wasm_bindgen]
pub fn handle_key_down(key: &str) -> Result<(), JsValue> {
    with_client(|client| client.key_down(key))
}

#[wasm_bindgen]
pub fn handle_key_up(key: &str) -> Result<(), JsValue> {
    with_client(|client| client.key_up(key))
}

#[wasm_bindgen]
pub fn handle_mouse_move(y: f32) -> Result<(), JsValue> {
    with_client(|client| client.mouse_move(y))
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    with_client(|client| client.start())
}

#[wasm_bindgen]
pub fn reset_game() -> Result<(), JsValue> {
    with_client(|client| client.reset())
}

#[wasm_bindgen]
pub fn set_pvp_mode() -> Result<(), JsValue> {
    with_client(|client| client.switch_mode(ControlMode::PlayerVsPlayer))
}

#[wasm_bindgen]
pub fn set_pvc_mode() -> Result<(), JsValue> {
    with_client(|client| client.switch_mode(ControlMode::PlayerVsAi))
}

#[wasm_bindgen]
pub fn player_score() -> Result<u8, JsValue> {
    with_client(|client| client.score.get(Side::Left))
}

#[wasm_bindgen]
pub fn opponent_score() -> Result<u8, JsValue> {
    with_client(|client| client.score.get(Side::Right))
}

#[wasm_bindgen]
pub fn is_game_over() -> Result<bool, JsValue> {
    with_client(|client| client.state.game_over)
}
