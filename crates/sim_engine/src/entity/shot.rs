//! Projectiles
//!
//! A shot remembers which spacecraft fired it (it can never hit its own
//! firer) and carries a single line shape spanning the travel of the last
//! tick, so the collision test is effectively swept and fast shots cannot
//! step over thin hulls between ticks.

use crate::entity::capability::{Collidable, Decayable, EntityKey, Movable, Positioned};
use crate::foundation::math::{Color, Point2f, Vec2};
use crate::geometry::{Line, Shape};

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Shot {
    /// World-space position (head of the trail)
    pub position: Point2f,
    /// Velocity
    pub velocity: Vec2,
    /// Damage applied on impact
    pub attack: f32,
    /// Remaining time to live
    pub ttl: f32,
    /// The spacecraft that fired this shot
    pub origin: EntityKey,
    trail: Shape,
}

impl Shot {
    /// Create a shot at its muzzle position
    ///
    /// The trail starts degenerate (both endpoints at the muzzle) and becomes
    /// the swept segment on the first advance.
    pub fn new(
        position: Point2f,
        velocity: Vec2,
        attack: f32,
        ttl: f32,
        origin: EntityKey,
    ) -> Self {
        Self {
            position,
            velocity,
            attack,
            ttl,
            origin,
            trail: Shape::Line(Line::new(Color::GREEN, position, position)),
        }
    }

    /// The world-space trail segment
    pub fn trail(&self) -> &Shape {
        &self.trail
    }
}

impl Positioned for Shot {
    fn position(&self) -> Point2f {
        self.position
    }

    fn rotation(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}

impl Movable for Shot {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn advance(&mut self, dt: f32) {
        let tail = self.position;
        self.position += self.velocity * dt;
        if let Shape::Line(line) = &mut self.trail {
            // Shots live directly in world space; local and world endpoints
            // are one and the same
            line.start = tail;
            line.end = self.position;
            line.world_start = tail;
            line.world_end = self.position;
        }
    }
}

impl Collidable for Shot {
    fn transformed_shapes(&self) -> Vec<&Shape> {
        vec![&self.trail]
    }
}

impl Decayable for Shot {
    fn ttl(&self) -> f32 {
        self.ttl
    }

    fn age(&mut self, dt: f32) {
        self.ttl = (self.ttl - dt).max(0.0);
    }
}
