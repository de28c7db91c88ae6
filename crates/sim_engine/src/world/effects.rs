//! Randomized particle effects
//!
//! Destruction bursts and impact sparks. Everything here is pure generation:
//! the world decides when to call these and owns the RNG, so seeded worlds
//! stay deterministic.

use rand::Rng;

use crate::config::SimConfig;
use crate::entity::Particle;
use crate::foundation::math::{constants, heading, Color, Point2f, Vec2};

const DEBRIS_COLOR: Color = Color::new(255, 170, 60);
const SPARK_COLOR: Color = Color::WHITE;

/// Debris cloud for a destroyed spacecraft
///
/// Directions are uniform; speeds draw from `(1 − u⁵) · max`, which piles up
/// near the maximum for a bright expanding front, while lifetimes draw from
/// `u³ · max` so most debris dies quickly and only a few embers linger.
pub(super) fn destruction_burst(
    position: Point2f,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    (0..config.burst_count)
        .map(|_| {
            let direction = heading(rng.gen_range(0.0..constants::TAU));
            let u: f32 = rng.gen();
            let speed = (1.0 - u.powi(5)) * config.burst_speed_max;
            let v: f32 = rng.gen();
            let ttl = v.powi(3) * config.burst_ttl_max;
            Particle::new(position, direction * speed, ttl, DEBRIS_COLOR)
        })
        .collect()
}

/// Spark spray for a projectile impact
///
/// Sparks fly back the way the shot came, fanned across the configured
/// spread, at speeds proportional to the shot's own.
pub(super) fn impact_sparks(
    point: Point2f,
    shot_velocity: Vec2,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let shot_speed = shot_velocity.magnitude();
    let reverse = (-shot_velocity.y).atan2(-shot_velocity.x);
    (0..config.spark_count)
        .map(|_| {
            let angle = reverse + (rng.gen::<f32>() - 0.5) * config.spark_spread;
            let speed = shot_speed * config.spark_speed_scale * (0.5 + rng.gen::<f32>() * 0.5);
            let ttl = rng.gen::<f32>() * config.spark_ttl_max;
            Particle::new(point, heading(angle) * speed, ttl, SPARK_COLOR)
        })
        .collect()
}
