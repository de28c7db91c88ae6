//! The pilot seam
//!
//! A pilot is an external decision maker (AI or a replay of human input)
//! attached to a spacecraft and invoked exactly once per tick, before
//! steering is consumed. Pilots drive the craft through the same public
//! intent API a keyboard handler would use; the simulation cannot tell the
//! difference.

use crate::entity::EntityKey;
use crate::foundation::math::{Point2f, Vec2};
use crate::spacecraft::Spacecraft;

/// Read-only snapshot of one spacecraft, taken before the mutable pass
#[derive(Debug, Clone)]
pub struct CraftObservation {
    /// The craft's key in the world
    pub key: EntityKey,
    /// World-space position
    pub position: Point2f,
    /// Rotation in radians
    pub rotation: f32,
    /// Velocity
    pub velocity: Vec2,
    /// Hull fraction in [0, 1]
    pub hull_ratio: f32,
}

/// What a pilot gets to see while deciding
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    /// Every live spacecraft as of the start of this tick
    pub crafts: &'a [CraftObservation],
}

impl WorldView<'_> {
    /// Look up a specific craft's observation
    pub fn craft(&self, key: EntityKey) -> Option<&CraftObservation> {
        self.crafts.iter().find(|obs| obs.key == key)
    }
}

/// A decision maker driving a spacecraft
pub trait Pilot {
    /// Called once per tick; set steering intents, a rotation target, or
    /// pull the trigger on the craft
    fn decide(&mut self, craft: &mut Spacecraft, view: &WorldView<'_>);
}
