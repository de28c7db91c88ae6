//! Starfray headless skirmish
//!
//! Assembles a player fighter and an AI-piloted marauder, then runs the
//! fixed-step simulation until one side is destroyed or time runs out. A
//! renderer would read world state between steps; this runner just logs the
//! outcome.

mod config;
mod content;
mod pilot;

use sim_engine::prelude::*;

use crate::config::GameConfig;
use crate::pilot::HunterPilot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sim_engine::foundation::logging::init();

    let game = GameConfig::load_or_default("starfray.toml");
    let registry = content::standard_registry()?;

    let mut world = World::with_seed(SimConfig::default(), game.seed);
    world.seed_starfield(Vec2::new(game.screen_width, game.screen_height));

    let player = world.add_entity(Entity::Spacecraft(registry.assemble(
        "fighter",
        Point2f::new(-200.0, 0.0),
        0.0,
    )?));
    let mut marauder = registry.assemble(
        "marauder",
        Point2f::new(200.0, 0.0),
        std::f32::consts::PI,
    )?;
    marauder.attach_pilot(Box::new(HunterPilot::new(player)));
    let hunter = world.add_entity(Entity::Spacecraft(marauder));

    log::info!("skirmish: fighter {player:?} vs marauder {hunter:?}");

    let dt = 1.0 / game.step_hz;
    let steps = (game.battle_seconds * game.step_hz) as u32;
    let mut outcome = "draw";
    for frame in 0..steps {
        // Stand-in player input: cruise toward the fight, return fire in
        // bursts
        if let Some(craft) = world.spacecraft_mut(player) {
            craft.steer_forward();
            if frame % 30 == 0 {
                craft.fire();
            }
        }

        world.step(dt);

        if !world.contains(player) {
            outcome = "marauder wins";
            break;
        }
        if !world.contains(hunter) {
            outcome = "fighter wins";
            break;
        }
    }

    for &key in world.spacecraft_keys() {
        if let Some(Entity::Spacecraft(craft)) = world.entity(key) {
            log::info!(
                "survivor {key:?}: hull {:.0}%, shield {:.0}%",
                craft.stats.hull_ratio() * 100.0,
                craft.stats.shield_ratio() * 100.0
            );
        }
    }
    log::info!(
        "outcome: {outcome} ({} shots and {} particles still in flight)",
        world.shot_keys().len(),
        world.particle_keys().len()
    );

    Ok(())
}
