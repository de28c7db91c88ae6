//! # Sim Engine
//!
//! A 2D space-combat simulation and collision engine.
//!
//! ## Features
//!
//! - **Capability Composition**: Entities mix orthogonal Movable /
//!   Collidable / Decayable facets instead of an inheritance chain
//! - **Rigid Multi-Part Spacecraft**: Parts aggregate stats and shapes into
//!   one body, transformed to world space every tick
//! - **Swept Projectiles**: Shot trails span the last tick of travel, so the
//!   segment intersection test cannot miss fast projectiles
//! - **Stable Bookkeeping**: A generational arena plus role indices that
//!   never go stale, even with mid-tick destruction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sim_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = PrototypeRegistry::new();
//!     // ... register part and craft prototypes ...
//!     let mut world = World::new(SimConfig::default());
//!     let craft = registry.assemble("fighter", Point2f::origin(), 0.0)?;
//!     let player = world.add_entity(Entity::Spacecraft(craft));
//!
//!     // Per frame: route input, then advance one tick
//!     if let Some(craft) = world.spacecraft_mut(player) {
//!         craft.steer_forward();
//!         craft.fire();
//!     }
//!     world.step(1.0 / 60.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod entity;
pub mod foundation;
pub mod geometry;
pub mod spacecraft;
pub mod world;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SimConfig},
        entity::{
            Capabilities, Collidable, Decayable, Entity, EntityKey, Movable, Particle, Positioned,
            Shot, Star, Starfield, Stats, StatsError,
        },
        foundation::math::{Color, Point2f, Vec2},
        geometry::{intersect_segments, Circle, Line, Shape},
        spacecraft::{
            AssemblyError, CraftObservation, CraftPrototype, Part, PartPlacement, PartPrototype,
            Pilot, PrototypeError, PrototypeRegistry, ShotSpawn, Spacecraft, TickEffects,
            WorldView,
        },
        world::World,
    };
}
