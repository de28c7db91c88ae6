//! World registry and simulation step
//!
//! The world owns every entity in a generational arena and keeps six
//! role-indexed key collections over it: mutable, collidable, decayable,
//! spacecraft, shots, particles. Adds and removals touch the arena and every
//! matching index in one logical step, and all per-tick passes iterate over
//! snapshots with removals and spawns applied between passes, never during
//! one.

mod collision;
mod effects;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use slotmap::SlotMap;

use crate::config::SimConfig;
use crate::entity::{Capabilities, Entity, EntityKey, Movable, Shot, Starfield};
use crate::foundation::math::Vec2;
use crate::spacecraft::{CraftObservation, Spacecraft, TickEffects, WorldView};

/// Root owner of all simulation state
pub struct World {
    entities: SlotMap<EntityKey, Entity>,
    mutable: Vec<EntityKey>,
    collidable: Vec<EntityKey>,
    decayable: Vec<EntityKey>,
    spacecraft: Vec<EntityKey>,
    shots: Vec<EntityKey>,
    particles: Vec<EntityKey>,
    starfield: Starfield,
    config: SimConfig,
    rng: SmallRng,
}

impl World {
    /// Create a world with a randomly seeded RNG
    pub fn new(config: SimConfig) -> Self {
        Self::from_rng(config, SmallRng::from_entropy())
    }

    /// Create a world with a fixed seed, for deterministic runs
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::from_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimConfig, rng: SmallRng) -> Self {
        Self {
            entities: SlotMap::with_key(),
            mutable: Vec::new(),
            collidable: Vec::new(),
            decayable: Vec::new(),
            spacecraft: Vec::new(),
            shots: Vec::new(),
            particles: Vec::new(),
            starfield: Starfield::default(),
            config,
            rng,
        }
    }

    /// The active tuning
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate the parallax star background for the given view extent
    pub fn seed_starfield(&mut self, extent: Vec2) {
        self.starfield = Starfield::generate(extent, &mut self.rng);
        log::info!("seeded starfield with {} stars", self.starfield.stars.len());
    }

    /// The star background
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Mutable star background, for the renderer's star resets
    pub fn starfield_mut(&mut self) -> &mut Starfield {
        &mut self.starfield
    }

    /// Insert an entity, indexing it under every capability it has
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        let capabilities = entity.capabilities();
        let is_spacecraft = matches!(entity, Entity::Spacecraft(_));
        let is_shot = matches!(entity, Entity::Shot(_));
        let key = self.entities.insert(entity);

        if capabilities.contains(Capabilities::MOVABLE) {
            self.mutable.push(key);
        }
        if capabilities.contains(Capabilities::COLLIDABLE) {
            self.collidable.push(key);
        }
        if capabilities.contains(Capabilities::DECAYABLE) {
            self.decayable.push(key);
        }
        if is_spacecraft {
            self.spacecraft.push(key);
            log::debug!("spawned spacecraft {key:?}");
        } else if is_shot {
            self.shots.push(key);
        } else {
            self.particles.push(key);
        }
        key
    }

    /// Remove an entity from the arena and every index
    ///
    /// Idempotent: an entity destroyed by two triggers in the same tick
    /// (expiry and collision, say) is removed once and the second call is a
    /// no-op.
    pub fn remove_entity(&mut self, key: EntityKey) {
        if self.entities.remove(key).is_none() {
            return;
        }
        for index in [
            &mut self.mutable,
            &mut self.collidable,
            &mut self.decayable,
            &mut self.spacecraft,
            &mut self.shots,
            &mut self.particles,
        ] {
            index.retain(|&k| k != key);
        }
    }

    /// Look up an entity
    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Look up an entity mutably
    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Whether the key still addresses a live entity
    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    /// Iterate over every live entity
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    /// Keys of all live spacecraft
    pub fn spacecraft_keys(&self) -> &[EntityKey] {
        &self.spacecraft
    }

    /// Keys of all live shots
    pub fn shot_keys(&self) -> &[EntityKey] {
        &self.shots
    }

    /// Keys of all live particles
    pub fn particle_keys(&self) -> &[EntityKey] {
        &self.particles
    }

    /// Convenience view of a spacecraft, for input handlers
    pub fn spacecraft_mut(&mut self, key: EntityKey) -> Option<&mut Spacecraft> {
        match self.entities.get_mut(key) {
            Some(Entity::Spacecraft(craft)) => Some(craft),
            _ => None,
        }
    }

    /// Advance the whole simulation one tick
    ///
    /// Pass order: mutable advance (with pilot decisions and weapon fire),
    /// decay sweep, collision resolution, destruction sweep. Each pass runs
    /// over a snapshot; removals and spawns land between passes.
    pub fn step(&mut self, dt: f32) {
        let observations = self.observe_spacecraft();

        // Mutable pass
        let mutable = self.mutable.clone();
        let mut fired = Vec::new();
        for key in mutable {
            let Some(entity) = self.entities.get_mut(key) else {
                continue;
            };
            match entity {
                Entity::Spacecraft(craft) => {
                    let view = WorldView {
                        crafts: &observations,
                    };
                    let mut tick_effects = TickEffects::default();
                    craft.tick(dt, &view, &mut tick_effects);
                    for spawn in tick_effects.shots {
                        fired.push((key, spawn));
                    }
                }
                Entity::Shot(shot) => shot.advance(dt),
                Entity::Particle(particle) => particle.advance(dt),
            }
        }
        for (origin, spawn) in fired {
            log::debug!("craft {origin:?} fired");
            self.add_entity(Entity::Shot(Shot::new(
                spawn.position,
                spawn.velocity,
                spawn.attack,
                spawn.ttl,
                origin,
            )));
        }

        // Decay sweep
        let decayable = self.decayable.clone();
        let mut expired = Vec::new();
        for key in decayable {
            let Some(entity) = self.entities.get_mut(key) else {
                continue;
            };
            if let Some(decayer) = entity.as_decayable_mut() {
                decayer.age(dt);
                if decayer.is_expired() {
                    expired.push(key);
                }
            }
        }
        for key in expired {
            self.remove_entity(key);
        }

        // Collision resolution
        collision::resolve(self);

        // Destruction sweep
        let dead: Vec<EntityKey> = self
            .spacecraft
            .iter()
            .copied()
            .filter(|&key| {
                matches!(
                    self.entities.get(key),
                    Some(Entity::Spacecraft(craft)) if craft.stats.is_destroyed()
                )
            })
            .collect();
        for key in dead {
            self.destroy_spacecraft(key);
        }
    }

    /// Snapshot every spacecraft for this tick's pilot decisions
    fn observe_spacecraft(&self) -> Vec<CraftObservation> {
        self.spacecraft
            .iter()
            .filter_map(|&key| match self.entities.get(key) {
                Some(Entity::Spacecraft(craft)) => Some(CraftObservation {
                    key,
                    position: craft.position,
                    rotation: craft.rotation,
                    velocity: craft.velocity,
                    hull_ratio: craft.stats.hull_ratio(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Blow a spacecraft apart: debris burst, then removal
    fn destroy_spacecraft(&mut self, key: EntityKey) {
        let position = match self.entities.get(key) {
            Some(Entity::Spacecraft(craft)) => craft.position,
            _ => return,
        };
        log::debug!("spacecraft {key:?} destroyed");
        let burst = effects::destruction_burst(position, &self.config, &mut self.rng);
        self.remove_entity(key);
        for particle in burst {
            self.add_entity(Entity::Particle(particle));
        }
    }
}
