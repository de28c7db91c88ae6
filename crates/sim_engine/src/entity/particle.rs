//! Particles
//!
//! Decorative feedback entities: exhaust, sparks, explosion debris. Movable
//! and decayable, never collidable.

use crate::entity::capability::{Decayable, Movable, Positioned};
use crate::foundation::math::{Color, Point2f, Vec2};

/// A short-lived decorative entity
#[derive(Debug, Clone)]
pub struct Particle {
    /// World-space position
    pub position: Point2f,
    /// Velocity
    pub velocity: Vec2,
    /// Remaining time to live
    pub ttl: f32,
    /// Render color
    pub color: Color,
}

impl Particle {
    /// Create a particle
    pub fn new(position: Point2f, velocity: Vec2, ttl: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            ttl,
            color,
        }
    }
}

impl Positioned for Particle {
    fn position(&self) -> Point2f {
        self.position
    }

    fn rotation(&self) -> f32 {
        0.0
    }
}

impl Movable for Particle {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl Decayable for Particle {
    fn ttl(&self) -> f32 {
        self.ttl
    }

    fn age(&mut self, dt: f32) {
        self.ttl = (self.ttl - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_integrates_velocity() {
        let mut particle = Particle::new(
            Point2f::new(1.0, 2.0),
            Vec2::new(10.0, -4.0),
            1.0,
            Color::WHITE,
        );
        particle.advance(0.5);
        assert_relative_eq!(particle.position, Point2f::new(6.0, 0.0));
    }

    #[test]
    fn test_ttl_clamps_at_zero() {
        let mut particle = Particle::new(Point2f::origin(), Vec2::zeros(), 1.0, Color::WHITE);
        particle.age(0.4);
        particle.age(0.4);
        assert!(!particle.is_expired());
        particle.age(0.4);
        assert_relative_eq!(particle.ttl, 0.0);
        assert!(particle.is_expired());
    }
}
