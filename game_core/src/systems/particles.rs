use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Particle, Rgb};
use crate::config::Params;
use crate::resources::GameRng;

/// Spawn a burst of particles at a paddle-ball contact point.
///
/// Every particle gets an independently randomized direction, speed,
/// radius and decay rate, and starts at full life. There is no cap on
/// the live particle count; density scales with collision frequency.
pub fn spawn_explosion(world: &mut World, rng: &mut GameRng, pos: Vec2, color: Rgb) {
    for _ in 0..Params::EXPLOSION_PARTICLES {
        let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.0.gen_range(1.0f32..4.0);
        let radius = rng.0.gen_range(1.0f32..4.0);
        let decay = rng.0.gen_range(0.01f32..0.03);

        world.spawn((Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius,
            color,
            life: 1.0,
            decay,
        },));
    }
}

/// Age every particle by one tick and despawn the expired ones
pub fn update_particles(world: &mut World) {
    let mut expired = Vec::new();
    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
        if particle.life <= 0.0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        let _ = world.despawn(entity);
    }
}

/// Number of live particles (used by tests and the renderer)
pub fn particle_count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}
