//! Entity capabilities
//!
//! Behavior is composed from orthogonal capability traits instead of an
//! inheritance chain: an entity kind implements exactly the facets it has,
//! and advertises them through a [`Capabilities`] bitset the world uses for
//! role indexing.

use bitflags::bitflags;
use slotmap::new_key_type;

use crate::foundation::math::{Point2f, Vec2};
use crate::geometry::Shape;

new_key_type! {
    /// Generational key addressing an entity in the world arena
    ///
    /// Keys of removed entities never resolve again, so holding a stale key
    /// (a shot outliving its firer, say) is harmless.
    pub struct EntityKey;
}

bitflags! {
    /// Capability set of an entity kind
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// Advances every tick (velocity integration or a full tick routine)
        const MOVABLE = 1 << 0;
        /// Carries shapes and takes part in collision detection
        const COLLIDABLE = 1 << 1;
        /// Ages toward expiry every tick
        const DECAYABLE = 1 << 2;
    }
}

/// Base spatial state every entity has
pub trait Positioned {
    /// World-space position
    fn position(&self) -> Point2f;

    /// Rotation in radians
    fn rotation(&self) -> f32;
}

/// Entities that move under their own velocity
pub trait Movable: Positioned {
    /// Current velocity
    fn velocity(&self) -> Vec2;

    /// Integrate one step: position += velocity · dt
    fn advance(&mut self, dt: f32);
}

/// Entities that carry collision shapes
pub trait Collidable {
    /// World-space shapes as of the last transform pass
    fn transformed_shapes(&self) -> Vec<&Shape>;
}

/// Entities with a limited time to live
pub trait Decayable {
    /// Remaining time to live in seconds
    fn ttl(&self) -> f32;

    /// Age by dt, clamping at zero
    fn age(&mut self, dt: f32);

    /// Whether the ttl has run out
    fn is_expired(&self) -> bool {
        self.ttl() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_composition() {
        let shot = Capabilities::MOVABLE | Capabilities::COLLIDABLE | Capabilities::DECAYABLE;
        assert!(shot.contains(Capabilities::DECAYABLE));

        let particle = Capabilities::MOVABLE | Capabilities::DECAYABLE;
        assert!(!particle.contains(Capabilities::COLLIDABLE));
    }
}
