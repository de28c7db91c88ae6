//! Spacecraft composition
//!
//! A spacecraft aggregates parts into one rigid body: stats are summed at
//! assembly, world-space shapes are recomputed from the craft transform each
//! tick, and all control (human or AI) flows through the same edge-triggered
//! intent API.

pub mod part;
pub mod pilot;
pub mod prototype;

pub use part::Part;
pub use pilot::{CraftObservation, Pilot, WorldView};
pub use prototype::{
    CraftPrototype, PartPlacement, PartPrototype, PrototypeError, PrototypeRegistry,
};

use std::fmt;

use thiserror::Error;

use crate::entity::capability::{Collidable, Movable, Positioned};
use crate::entity::{Stats, StatsError};
use crate::foundation::math::{constants, heading, normalize_angle, wrap_angle, Iso2, Point2f, Vec2};
use crate::geometry::Shape;

/// Spacecraft construction failure
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A spacecraft needs at least one part
    #[error("a spacecraft needs at least one part")]
    NoParts,

    /// A part carried invalid stats
    #[error("part {index} is invalid")]
    InvalidPart {
        /// Index of the offending part
        index: usize,
        /// Validation failure
        #[source]
        source: StatsError,
    },
}

/// Steering intents, consumed and cleared every tick
#[derive(Debug, Default, Clone, Copy)]
struct SteerIntents {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
}

/// A shot requested by a weapon this tick, to be spawned by the world
#[derive(Debug, Clone)]
pub struct ShotSpawn {
    /// Muzzle position in world space
    pub position: Point2f,
    /// Projectile velocity
    pub velocity: Vec2,
    /// Damage on impact
    pub attack: f32,
    /// Projectile time to live
    pub ttl: f32,
}

/// Side effects a spacecraft tick hands back to the world
#[derive(Debug, Default)]
pub struct TickEffects {
    /// Shots fired this tick
    pub shots: Vec<ShotSpawn>,
}

/// A multi-part rigid-body spacecraft
pub struct Spacecraft {
    /// World-space position
    pub position: Point2f,
    /// Rotation in radians
    pub rotation: f32,
    /// Velocity
    pub velocity: Vec2,
    /// Aggregate stats, the running sum over the parts
    pub stats: Stats,
    parts: Vec<Part>,
    rotate_to: f32,
    steer: SteerIntents,
    trigger: bool,
    pilot: Option<Box<dyn Pilot>>,
}

impl fmt::Debug for Spacecraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spacecraft")
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("velocity", &self.velocity)
            .field("parts", &self.parts.len())
            .field("hp", &self.stats.hp)
            .field("piloted", &self.pilot.is_some())
            .finish()
    }
}

impl Spacecraft {
    /// Build a spacecraft from its parts
    ///
    /// Rejects an empty part list and any part with invalid stats; the
    /// aggregate stats are computed here and never re-derived.
    pub fn new(position: Point2f, rotation: f32, parts: Vec<Part>) -> Result<Self, AssemblyError> {
        if parts.is_empty() {
            return Err(AssemblyError::NoParts);
        }
        let mut stats = Stats::zeroed();
        for (index, part) in parts.iter().enumerate() {
            part.stats
                .validate()
                .map_err(|source| AssemblyError::InvalidPart { index, source })?;
            stats.combine(&part.stats);
        }
        let mut craft = Self {
            position,
            rotation,
            velocity: Vec2::zeros(),
            stats,
            parts,
            rotate_to: rotation,
            steer: SteerIntents::default(),
            trigger: false,
            pilot: None,
        };
        craft.refresh_shapes();
        Ok(craft)
    }

    /// Attach a pilot; it will be consulted once per tick from now on
    pub fn attach_pilot(&mut self, pilot: Box<dyn Pilot>) {
        self.pilot = Some(pilot);
    }

    /// The craft's parts, in assembly order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Current rotation target
    pub fn target_rotation(&self) -> f32 {
        self.rotate_to
    }

    /// Request thrust along the current facing this tick
    pub fn steer_forward(&mut self) {
        self.steer.forward = true;
    }

    /// Request reverse thrust this tick
    pub fn steer_back(&mut self) {
        self.steer.back = true;
    }

    /// Request lateral thrust to port this tick
    pub fn steer_left(&mut self) {
        self.steer.left = true;
    }

    /// Request lateral thrust to starboard this tick
    pub fn steer_right(&mut self) {
        self.steer.right = true;
    }

    /// Pull the trigger: every ready weapon fires on this tick
    pub fn fire(&mut self) {
        self.trigger = true;
    }

    /// Set the rotation target, always turning the short way
    ///
    /// The current rotation is normalized into [0, 2π) and the requested
    /// angle stored as the nearest equivalent, so the per-tick rotation step
    /// never takes the long way around.
    pub fn set_target_rotation(&mut self, angle: f32) {
        self.rotation = normalize_angle(self.rotation);
        let delta = wrap_angle(angle - self.rotation);
        self.rotate_to = self.rotation + delta;
    }

    /// Advance the craft one tick
    ///
    /// Order matters: the pilot sets intents, steering and rotation update
    /// the state those intents describe, the speed clamp bounds the result,
    /// parts and shapes are refreshed, and only then are ready weapons fired
    /// from their up-to-date muzzle positions.
    pub fn tick(&mut self, dt: f32, view: &WorldView<'_>, effects: &mut TickEffects) {
        if let Some(mut pilot) = self.pilot.take() {
            pilot.decide(self, view);
            self.pilot = Some(pilot);
        }

        self.apply_steering(dt);
        self.rotate_toward_target(dt);
        self.clamp_speed();
        self.advance(dt);

        for part in &mut self.parts {
            part.tick(dt);
        }
        self.stats.regenerate(dt);
        self.refresh_shapes();

        if self.trigger {
            self.trigger = false;
            self.fire_ready_weapons(effects);
        }
    }

    /// Consume the steering intents: each adds acceleration · dt along its
    /// facing-relative direction, then all flags clear
    fn apply_steering(&mut self, dt: f32) {
        let impulse = self.stats.acceleration * dt;
        if self.steer.forward {
            self.velocity += heading(self.rotation) * impulse;
        }
        if self.steer.back {
            self.velocity += heading(self.rotation + constants::PI) * impulse;
        }
        if self.steer.left {
            self.velocity += heading(self.rotation + constants::HALF_PI) * impulse;
        }
        if self.steer.right {
            self.velocity += heading(self.rotation - constants::HALF_PI) * impulse;
        }
        self.steer = SteerIntents::default();
    }

    /// Step toward the rotation target, snapping once within reach
    fn rotate_toward_target(&mut self, dt: f32) {
        let remaining = self.rotate_to - self.rotation;
        let max_step = self.stats.rotation_speed * dt;
        if remaining.abs() <= max_step {
            self.rotation = self.rotate_to;
        } else {
            self.rotation += max_step.copysign(remaining);
        }
    }

    /// Rescale velocity onto the speed limit, preserving direction
    fn clamp_speed(&mut self) {
        let speed = self.velocity.magnitude();
        if speed > self.stats.speed_max && speed > 0.0 {
            self.velocity *= self.stats.speed_max / speed;
        }
    }

    /// Recompute every part's world-space shapes from the craft transform
    fn refresh_shapes(&mut self) {
        let transform = self.isometry();
        for part in &mut self.parts {
            part.apply_transform(&transform);
        }
    }

    /// Fire every part whose weapon is ready, resetting its cooldown
    ///
    /// Weapons gate independently: a cooling cannon does not stop its
    /// neighbors from firing.
    fn fire_ready_weapons(&mut self, effects: &mut TickEffects) {
        let transform = self.isometry();
        let direction = heading(self.rotation);
        for part in &mut self.parts {
            if part.stats.can_fire() {
                part.stats.reset_cooldown();
                effects.shots.push(ShotSpawn {
                    position: part.world_origin(&transform),
                    velocity: direction * part.stats.attack_speed,
                    attack: part.stats.attack,
                    ttl: part.stats.attack_ttl,
                });
            }
        }
    }

    /// The craft's rigid transform
    fn isometry(&self) -> Iso2 {
        Iso2::new(self.position.coords, self.rotation)
    }
}

impl Positioned for Spacecraft {
    fn position(&self) -> Point2f {
        self.position
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }
}

impl Movable for Spacecraft {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl Collidable for Spacecraft {
    fn transformed_shapes(&self) -> Vec<&Shape> {
        self.parts
            .iter()
            .flat_map(|part| part.shapes.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Color;
    use crate::geometry::Line;
    use approx::assert_relative_eq;

    fn hull_part(hp: f32) -> Part {
        Part {
            offset: Vec2::zeros(),
            rotation: 0.0,
            shapes: vec![Shape::Line(Line::new(
                Color::GREEN,
                Point2f::new(-5.0, 0.0),
                Point2f::new(5.0, 0.0),
            ))],
            stats: Stats {
                hp_max: hp,
                hp,
                ..Stats::zeroed()
            },
        }
    }

    fn engine_part() -> Part {
        Part {
            offset: Vec2::new(-3.0, 0.0),
            rotation: 0.0,
            shapes: Vec::new(),
            stats: Stats {
                acceleration: 10.0,
                speed_max: 20.0,
                rotation_speed: 2.0,
                ..Stats::zeroed()
            },
        }
    }

    fn cannon_part(offset: Vec2) -> Part {
        Part {
            offset,
            rotation: 0.0,
            shapes: Vec::new(),
            stats: Stats {
                attack: 10.0,
                attack_cooldown_max: 0.5,
                attack_speed: 200.0,
                attack_ttl: 1.5,
                ..Stats::zeroed()
            },
        }
    }

    fn fighter() -> Spacecraft {
        Spacecraft::new(
            Point2f::origin(),
            0.0,
            vec![hull_part(100.0), engine_part(), cannon_part(Vec2::new(5.0, 0.0))],
        )
        .expect("valid craft")
    }

    fn empty_view() -> WorldView<'static> {
        WorldView { crafts: &[] }
    }

    #[test]
    fn test_rejects_empty_part_list() {
        assert!(matches!(
            Spacecraft::new(Point2f::origin(), 0.0, Vec::new()),
            Err(AssemblyError::NoParts)
        ));
    }

    #[test]
    fn test_rejects_invalid_part_stats() {
        let mut bad = hull_part(50.0);
        bad.stats.attack = -1.0;
        let result = Spacecraft::new(Point2f::origin(), 0.0, vec![hull_part(50.0), bad]);
        assert!(matches!(
            result,
            Err(AssemblyError::InvalidPart { index: 1, .. })
        ));
    }

    #[test]
    fn test_stats_aggregate_over_parts() {
        let craft = fighter();
        assert_relative_eq!(craft.stats.hp_max, 100.0);
        assert_relative_eq!(craft.stats.acceleration, 10.0);
        assert_relative_eq!(craft.stats.attack, 10.0);
    }

    #[test]
    fn test_steering_is_edge_triggered() {
        let mut craft = fighter();
        craft.steer_forward();
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        let after_first = craft.velocity;
        assert_relative_eq!(after_first.x, 1.0, epsilon = 1e-5);

        // Flag was consumed: no further thrust without re-asserting it
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        assert_relative_eq!(craft.velocity, after_first);
    }

    #[test]
    fn test_steering_directions_are_facing_relative() {
        let mut craft = fighter();
        craft.rotation = constants::HALF_PI;
        craft.rotate_to = constants::HALF_PI;
        craft.steer_left();
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        // Facing +y, port is −x
        assert!(craft.velocity.x < 0.0);
        assert_relative_eq!(craft.velocity.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_speed_clamps_exactly_preserving_direction() {
        let mut craft = fighter();
        craft.velocity = Vec2::new(30.0, 40.0);
        craft.tick(0.01, &empty_view(), &mut TickEffects::default());
        assert_relative_eq!(craft.velocity.magnitude(), 20.0, epsilon = 1e-4);
        assert_relative_eq!(craft.velocity.y / craft.velocity.x, 40.0 / 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_target_takes_shortest_path() {
        let mut craft = fighter();
        craft.rotation = 0.1;
        craft.set_target_rotation(constants::TAU - 0.1);
        // Target is stored as −0.1, a short negative turn, not a long
        // positive sweep
        assert_relative_eq!(craft.target_rotation(), -0.1, epsilon = 1e-5);
        assert!((craft.target_rotation() - craft.rotation).abs() <= constants::PI);
    }

    #[test]
    fn test_rotation_steps_then_snaps() {
        let mut craft = fighter();
        craft.set_target_rotation(1.0);
        // rotation_speed 2.0, dt 0.1: steps of 0.2
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        assert_relative_eq!(craft.rotation, 0.2, epsilon = 1e-5);
        for _ in 0..3 {
            craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        }
        assert_relative_eq!(craft.rotation, 0.8, epsilon = 1e-5);
        // Remaining 0.2 ≤ step: snap, no overshoot
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        assert_relative_eq!(craft.rotation, 1.0, epsilon = 1e-5);
        craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        assert_relative_eq!(craft.rotation, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_fire_gated_by_cooldown() {
        let mut craft = fighter();
        let mut effects = TickEffects::default();
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        assert_eq!(effects.shots.len(), 1);
        let cannon = &craft.parts()[2];
        assert_relative_eq!(cannon.stats.attack_cooldown, 0.5);

        // Still cooling: trigger does nothing
        let mut effects = TickEffects::default();
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        assert!(effects.shots.is_empty());

        // After the full cooldown has elapsed it fires again
        for _ in 0..4 {
            craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        }
        assert_relative_eq!(craft.parts()[2].stats.attack_cooldown, 0.0);
        let mut effects = TickEffects::default();
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        assert_eq!(effects.shots.len(), 1);
    }

    #[test]
    fn test_weapons_fire_independently() {
        let mut craft = Spacecraft::new(
            Point2f::origin(),
            0.0,
            vec![
                hull_part(100.0),
                cannon_part(Vec2::new(5.0, 2.0)),
                cannon_part(Vec2::new(5.0, -2.0)),
            ],
        )
        .expect("valid craft");

        let mut effects = TickEffects::default();
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        assert_eq!(effects.shots.len(), 2);

        // Both cooldowns run down together and both fire again
        let mut effects = TickEffects::default();
        for _ in 0..5 {
            craft.tick(0.1, &empty_view(), &mut TickEffects::default());
        }
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        assert_eq!(effects.shots.len(), 2);
    }

    #[test]
    fn test_shot_spawn_carries_weapon_stats() {
        let mut craft = fighter();
        let mut effects = TickEffects::default();
        craft.fire();
        craft.tick(0.1, &empty_view(), &mut effects);
        let spawn = &effects.shots[0];
        assert_relative_eq!(spawn.attack, 10.0);
        assert_relative_eq!(spawn.ttl, 1.5);
        assert_relative_eq!(spawn.velocity.magnitude(), 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_shapes_follow_the_craft() {
        let mut craft = fighter();
        craft.velocity = Vec2::new(10.0, 0.0);
        craft.tick(1.0, &empty_view(), &mut TickEffects::default());

        let shapes = craft.transformed_shapes();
        let (start, _) = shapes[0].world_segment().expect("hull line");
        assert_relative_eq!(start, Point2f::new(5.0, 0.0), epsilon = 1e-4);
    }
}
