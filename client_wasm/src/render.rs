//! Side-effect-only painting of the current simulation state onto a
//! 2D canvas. Reads, never mutates.

use game_core::{Ball, Config, ControlMode, MatchState, Paddle, Particle, Rgb, Score, Side};
use hecs::World;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const FIELD_COLOR: &str = "#00fffc";
const BALL_COLOR: &str = "#ffffff";
const CENTER_CIRCLE_RADIUS: f64 = 50.0;
const GLOW_BLUR: f64 = 15.0;

pub fn draw(
    ctx: &CanvasRenderingContext2d,
    world: &World,
    state: &MatchState,
    score: &Score,
    config: &Config,
) -> Result<(), JsValue> {
    let width = config.field_width as f64;
    let height = config.field_height as f64;

    // Translucent wash instead of a clear, for the trail-fade effect
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.1)");
    ctx.fill_rect(0.0, 0.0, width, height);

    draw_field(ctx, width, height)?;
    draw_net(ctx, width, height)?;

    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        draw_paddle(ctx, paddle, config);
    }
    for (_entity, ball) in world.query::<&Ball>().iter() {
        draw_glow_circle(
            ctx,
            ball.pos.x as f64,
            ball.pos.y as f64,
            config.ball_radius as f64,
            BALL_COLOR,
        )?;
    }
    for (_entity, particle) in world.query::<&Particle>().iter() {
        draw_particle(ctx, particle)?;
    }

    if state.game_over {
        draw_game_over(ctx, state, score, width, height)?;
    }
    Ok(())
}

fn draw_field(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(FIELD_COLOR);
    ctx.set_line_width(2.0);
    ctx.stroke_rect(0.0, 0.0, width, height);

    ctx.begin_path();
    ctx.arc(
        width / 2.0,
        height / 2.0,
        CENTER_CIRCLE_RADIUS,
        0.0,
        std::f64::consts::TAU,
    )?;
    ctx.stroke();
    Ok(())
}

fn draw_net(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    let dashes = js_sys::Array::of2(&JsValue::from_f64(10.0), &JsValue::from_f64(10.0));
    ctx.set_line_dash(&dashes)?;
    ctx.begin_path();
    ctx.move_to(width / 2.0, 0.0);
    ctx.line_to(width / 2.0, height);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn draw_paddle(ctx: &CanvasRenderingContext2d, paddle: &Paddle, config: &Config) {
    let color = css_color(config.hit_color(paddle.side));
    let x = config.paddle_x(paddle.side) as f64;
    let y = paddle.y as f64;
    let w = config.paddle_width as f64;
    let h = config.paddle_height as f64;

    ctx.set_fill_style_str(&color);
    ctx.fill_rect(x, y, w, h);

    // Second pass with a shadow for the glow
    ctx.set_shadow_color(&color);
    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.fill_rect(x, y, w, h);
    ctx.set_shadow_blur(0.0);
}

fn draw_glow_circle(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
    ctx.fill();

    ctx.set_shadow_color(color);
    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    ctx.set_global_alpha(particle.life.clamp(0.0, 1.0) as f64);
    draw_glow_circle(
        ctx,
        particle.pos.x as f64,
        particle.pos.y as f64,
        particle.radius as f64,
        &css_color(particle.color),
    )?;
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_game_over(
    ctx: &CanvasRenderingContext2d,
    state: &MatchState,
    score: &Score,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(FIELD_COLOR);
    ctx.set_text_align("center");

    ctx.set_font("48px Orbitron");
    ctx.fill_text("GAME OVER", width / 2.0, height / 2.0 - 50.0)?;

    let left_won = score.get(Side::Left) > score.get(Side::Right);
    let winner = match (state.mode, left_won) {
        (ControlMode::PlayerVsPlayer, true) => "PLAYER 1 WINS!",
        (ControlMode::PlayerVsPlayer, false) => "PLAYER 2 WINS!",
        (ControlMode::PlayerVsAi, true) => "PLAYER WINS!",
        (ControlMode::PlayerVsAi, false) => "CPU WINS!",
    };
    ctx.set_font("24px Orbitron");
    ctx.fill_text(winner, width / 2.0, height / 2.0 + 20.0)?;

    ctx.set_font("16px Orbitron");
    ctx.fill_text(
        "Click RESET to play again",
        width / 2.0,
        height / 2.0 + 60.0,
    )?;
    Ok(())
}

fn css_color(Rgb(r, g, b): Rgb) -> String {
    format!("rgb({}, {}, {})", r, g, b)
}
