//! Entity model
//!
//! Concrete entity kinds compose the orthogonal capability traits from
//! [`capability`]; the [`Entity`] enum is the tagged union the world stores,
//! replacing runtime type inspection with a plain match.

pub mod capability;
pub mod particle;
pub mod shot;
pub mod star;
pub mod stats;

pub use capability::{Capabilities, Collidable, Decayable, EntityKey, Movable, Positioned};
pub use particle::Particle;
pub use shot::Shot;
pub use star::{Star, Starfield};
pub use stats::{Stats, StatsError};

use crate::foundation::math::Point2f;
use crate::spacecraft::Spacecraft;

/// Any entity the world can own
#[derive(Debug)]
pub enum Entity {
    /// A multi-part spacecraft
    Spacecraft(Spacecraft),
    /// A projectile
    Shot(Shot),
    /// A decorative particle
    Particle(Particle),
}

impl Entity {
    /// The capability set of this entity kind, driving role indexing
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Spacecraft(_) => Capabilities::MOVABLE | Capabilities::COLLIDABLE,
            Self::Shot(_) => {
                Capabilities::MOVABLE | Capabilities::COLLIDABLE | Capabilities::DECAYABLE
            }
            Self::Particle(_) => Capabilities::MOVABLE | Capabilities::DECAYABLE,
        }
    }

    /// World-space position
    pub fn position(&self) -> Point2f {
        match self {
            Self::Spacecraft(craft) => craft.position(),
            Self::Shot(shot) => shot.position(),
            Self::Particle(particle) => particle.position(),
        }
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        match self {
            Self::Spacecraft(craft) => Positioned::rotation(craft),
            Self::Shot(shot) => Positioned::rotation(shot),
            Self::Particle(particle) => Positioned::rotation(particle),
        }
    }

    /// Collidable view, for kinds that carry shapes
    pub fn as_collidable(&self) -> Option<&dyn Collidable> {
        match self {
            Self::Spacecraft(craft) => Some(craft),
            Self::Shot(shot) => Some(shot),
            Self::Particle(_) => None,
        }
    }

    /// Decayable view, for kinds with a time to live
    pub fn as_decayable_mut(&mut self) -> Option<&mut dyn Decayable> {
        match self {
            Self::Spacecraft(_) => None,
            Self::Shot(shot) => Some(shot),
            Self::Particle(particle) => Some(particle),
        }
    }
}
