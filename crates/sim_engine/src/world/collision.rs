//! Collision resolution
//!
//! Once per tick, every unordered pair of collidable entities is tested
//! exactly once across the cross product of their line shapes. Hits are
//! collected first and applied afterwards, so the scan never mutates the
//! indices it walks.

use crate::entity::{Collidable, Entity, EntityKey};
use crate::foundation::math::{Point2f, Vec2};
use crate::geometry::intersect_segments;
use crate::world::{effects, World};

/// A spacecraft-shot impact found during the scan
struct Hit {
    craft: EntityKey,
    shot: EntityKey,
    point: Point2f,
    shot_velocity: Vec2,
    attack: f32,
}

/// Run collision detection and apply the resulting hits
pub(super) fn resolve(world: &mut World) {
    let keys = world.collidable.clone();
    let mut hits = Vec::new();

    for (i, &a) in keys.iter().enumerate() {
        for &b in &keys[i + 1..] {
            if let Some(hit) = test_pair(world, a, b) {
                hits.push(hit);
            }
        }
    }

    let mut spent_shots = Vec::with_capacity(hits.len());
    for hit in hits {
        log::trace!(
            "shot {:?} hit craft {:?} at ({:.1}, {:.1}) for {}",
            hit.shot,
            hit.craft,
            hit.point.x,
            hit.point.y,
            hit.attack
        );
        if let Some(Entity::Spacecraft(craft)) = world.entities.get_mut(hit.craft) {
            craft.stats.apply_damage(hit.attack);
        }
        let sparks =
            effects::impact_sparks(hit.point, hit.shot_velocity, &world.config, &mut world.rng);
        for spark in sparks {
            world.add_entity(Entity::Particle(spark));
        }
        spent_shots.push(hit.shot);
    }
    for key in spent_shots {
        // A shot may have struck two crafts this tick; removal tolerates that
        world.remove_entity(key);
    }
}

/// Test one unordered pair, stopping at the first intersecting shape pair
///
/// Only spacecraft-shot pairs produce hit events; a shot never registers
/// against its own firer, and all other pair kinds are reserved.
fn test_pair(world: &World, a: EntityKey, b: EntityKey) -> Option<Hit> {
    let entity_a = world.entities.get(a)?;
    let entity_b = world.entities.get(b)?;

    let (craft_key, craft, shot_key, shot) = match (entity_a, entity_b) {
        (Entity::Spacecraft(craft), Entity::Shot(shot)) => (a, craft, b, shot),
        (Entity::Shot(shot), Entity::Spacecraft(craft)) => (b, craft, a, shot),
        _ => return None,
    };
    if shot.origin == craft_key {
        return None;
    }

    let epsilon = world.config.parallel_epsilon;
    for craft_shape in craft.transformed_shapes() {
        let Some((a1, a2)) = craft_shape.world_segment() else {
            continue;
        };
        for shot_shape in shot.transformed_shapes() {
            let Some((b1, b2)) = shot_shape.world_segment() else {
                continue;
            };
            if let Some(point) = intersect_segments(a1, a2, b1, b2, epsilon) {
                return Some(Hit {
                    craft: craft_key,
                    shot: shot_key,
                    point,
                    shot_velocity: shot.velocity,
                    attack: shot.attack,
                });
            }
        }
    }
    None
}
