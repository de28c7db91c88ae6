//! AI pilots
//!
//! External decision makers driving spacecraft through the same intent API
//! a keyboard handler uses.

use sim_engine::prelude::*;

/// Weapon envelope derived from the craft's parts on first use
#[derive(Debug, Clone, Copy)]
struct WeaponTuning {
    shooting_range: f32,
    optimal_distance: f32,
}

impl WeaponTuning {
    /// Scan for the highest-dps weapon and derive an engagement envelope
    /// from it; unarmed crafts fall back to shadowing the target
    fn from_parts(parts: &[Part]) -> Self {
        let mut best: Option<&Stats> = None;
        let mut best_dps = 0.0;
        for part in parts {
            if part.stats.attack > 0.0 && part.stats.attack_cooldown_max > 0.0 {
                let dps = part.stats.attack / part.stats.attack_cooldown_max;
                if dps > best_dps {
                    best_dps = dps;
                    best = Some(&part.stats);
                }
            }
        }
        match best {
            Some(stats) => {
                let shooting_range = stats.attack_speed * stats.attack_ttl;
                Self {
                    shooting_range,
                    optimal_distance: shooting_range * 0.667,
                }
            }
            None => Self {
                shooting_range: 0.0,
                optimal_distance: 350.0,
            },
        }
    }
}

/// Chases a target craft, holds weapons distance, and fires when in range
pub struct HunterPilot {
    target: EntityKey,
    tuning: Option<WeaponTuning>,
}

impl HunterPilot {
    /// Create a pilot hunting the given craft
    pub fn new(target: EntityKey) -> Self {
        Self {
            target,
            tuning: None,
        }
    }
}

impl Pilot for HunterPilot {
    fn decide(&mut self, craft: &mut Spacecraft, view: &WorldView<'_>) {
        let tuning = *self
            .tuning
            .get_or_insert_with(|| WeaponTuning::from_parts(craft.parts()));

        // Target gone: drift
        let Some(target) = view.craft(self.target) else {
            return;
        };

        // Face the target
        let to_target = target.position - craft.position;
        craft.set_target_rotation(to_target.y.atan2(to_target.x));

        // Close in or back off to hold the engagement distance
        let distance = to_target.magnitude();
        if distance > tuning.optimal_distance {
            craft.steer_forward();
        } else if distance < tuning.optimal_distance * 0.85 {
            craft.steer_back();
        }

        // Counter lateral drift relative to the target
        let drift = target.velocity - craft.velocity;
        if drift.magnitude() > f32::EPSILON {
            let drift_angle = drift.y.atan2(drift.x) - craft.rotation;
            if drift_angle.cos().abs() < 0.5 {
                if drift_angle.sin() > 0.0 {
                    craft.steer_left();
                } else {
                    craft.steer_right();
                }
            }
        }

        if distance <= tuning.shooting_range {
            craft.fire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::standard_registry;

    fn observed(key: EntityKey, position: Point2f) -> CraftObservation {
        CraftObservation {
            key,
            position,
            rotation: 0.0,
            velocity: Vec2::zeros(),
            hull_ratio: 1.0,
        }
    }

    fn marauder() -> Spacecraft {
        standard_registry()
            .expect("registry builds")
            .assemble("marauder", Point2f::origin(), 0.0)
            .expect("assembles")
    }

    #[test]
    fn test_fires_when_target_in_range() {
        // Marauder cannon: 260 speed * 1.4 ttl = 364 range, standoff ~243
        let target_key = EntityKey::default();
        let mut pilot = HunterPilot::new(target_key);
        let mut craft = marauder();
        let crafts = [observed(target_key, Point2f::new(300.0, 0.0))];
        let view = WorldView { crafts: &crafts };

        pilot.decide(&mut craft, &view);

        let mut effects = TickEffects::default();
        craft.tick(1.0 / 60.0, &WorldView { crafts: &[] }, &mut effects);
        assert_eq!(effects.shots.len(), 2);
        // Past the standoff distance, it also closes in
        assert!(craft.velocity.x > 0.0);
    }

    #[test]
    fn test_holds_fire_and_chases_a_distant_target() {
        let target_key = EntityKey::default();
        let mut pilot = HunterPilot::new(target_key);
        let mut craft = marauder();
        let crafts = [observed(target_key, Point2f::new(1000.0, 0.0))];
        let view = WorldView { crafts: &crafts };

        pilot.decide(&mut craft, &view);

        let mut effects = TickEffects::default();
        craft.tick(1.0 / 60.0, &WorldView { crafts: &[] }, &mut effects);
        assert!(effects.shots.is_empty());
        assert!(craft.velocity.x > 0.0);
    }

    #[test]
    fn test_backs_off_when_too_close() {
        let target_key = EntityKey::default();
        let mut pilot = HunterPilot::new(target_key);
        let mut craft = marauder();
        let crafts = [observed(target_key, Point2f::new(50.0, 0.0))];
        let view = WorldView { crafts: &crafts };

        pilot.decide(&mut craft, &view);

        let mut effects = TickEffects::default();
        craft.tick(1.0 / 60.0, &WorldView { crafts: &[] }, &mut effects);
        // Inside 85% of the standoff distance: reverse thrust
        assert!(craft.velocity.x < 0.0);
    }

    #[test]
    fn test_idles_without_a_target() {
        let mut pilot = HunterPilot::new(EntityKey::default());
        let mut craft = marauder();
        let view = WorldView { crafts: &[] };

        pilot.decide(&mut craft, &view);

        let mut effects = TickEffects::default();
        craft.tick(1.0 / 60.0, &WorldView { crafts: &[] }, &mut effects);
        assert!(effects.shots.is_empty());
        assert_eq!(craft.velocity, Vec2::zeros());
    }
}
