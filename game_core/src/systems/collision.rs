use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng};
use crate::systems::particles::spawn_explosion;

/// Bounce the ball off the top and bottom field edges.
/// Energy-neutral: only the sign of the vertical velocity changes, and at
/// most once per tick.
pub fn bounce_walls(world: &mut World, events: &mut Events, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - config.ball_radius < 0.0
            || ball.pos.y + config.ball_radius > config.field_height
        {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Resolve ball-paddle collisions, checked independently for each paddle.
///
/// On overlap the rebound is driven by where the ball struck the paddle:
/// `hit` is the ball center's offset from the paddle center, normalized to
/// [-1, 1]. The horizontal speed grows 5% per hit with no ceiling; the
/// vertical velocity becomes `hit * spin`. Each hit also spawns a particle
/// explosion at the contact point in the paddle's color.
pub fn collide_paddles(world: &mut World, events: &mut Events, rng: &mut GameRng, config: &Config) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };
    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return,
    };

    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let mut bursts = Vec::new();
    let ball_rect = config.ball_rect(ball.pos);

    for (side, paddle_y) in paddles {
        if !ball_rect.overlaps(&config.paddle_rect(side, paddle_y)) {
            continue;
        }

        let half_height = config.paddle_height / 2.0;
        let hit = ((ball.pos.y - (paddle_y + half_height)) / half_height).clamp(-1.0, 1.0);

        // Horizontal rebound: away from the struck paddle, 5% faster
        let speed = ball.vel.x.abs() * config.ball_speed_growth;
        ball.vel.x = match side {
            Side::Left => speed,
            Side::Right => -speed,
        };
        ball.vel.y = hit * config.ball_spin;

        events.ball_hit_paddle = true;
        bursts.push((ball.pos, config.hit_color(side)));
    }

    if events.ball_hit_paddle {
        for (_entity, b) in world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }
    for (pos, color) in bursts {
        spawn_explosion(world, rng, pos, color);
    }
}
