//! Ship content
//!
//! Part and craft prototypes, laid out in part-local coordinates with +x as
//! the craft's facing.

use sim_engine::prelude::*;

fn line(start: (f32, f32), end: (f32, f32)) -> Shape {
    Shape::Line(Line::new(
        Color::GREEN,
        Point2f::new(start.0, start.1),
        Point2f::new(end.0, end.1),
    ))
}

/// Build the standard prototype registry
pub fn standard_registry() -> Result<PrototypeRegistry, PrototypeError> {
    let mut registry = PrototypeRegistry::new();

    // Arrowhead hull
    registry.register_part(PartPrototype {
        name: "hull".to_string(),
        shapes: vec![
            line((8.0, 0.0), (-6.0, 5.0)),
            line((-6.0, 5.0), (-4.0, 0.0)),
            line((-4.0, 0.0), (-6.0, -5.0)),
            line((-6.0, -5.0), (8.0, 0.0)),
        ],
        stats: Stats {
            hp_max: 100.0,
            hp: 100.0,
            hp_regen: 1.5,
            ..Stats::zeroed()
        },
    })?;

    // Main drive: all of the craft's mobility
    registry.register_part(PartPrototype {
        name: "engine".to_string(),
        shapes: vec![line((-4.0, 2.0), (-8.0, 2.0)), line((-4.0, -2.0), (-8.0, -2.0))],
        stats: Stats {
            acceleration: 60.0,
            speed_max: 180.0,
            rotation_speed: 3.5,
            ..Stats::zeroed()
        },
    })?;

    // Single-barrel cannon
    registry.register_part(PartPrototype {
        name: "cannon".to_string(),
        shapes: vec![line((0.0, 0.0), (5.0, 0.0))],
        stats: Stats {
            attack: 10.0,
            attack_cooldown_max: 0.5,
            attack_speed: 260.0,
            attack_ttl: 1.4,
            ..Stats::zeroed()
        },
    })?;

    // Shield emitter; the circle is its projected bubble
    registry.register_part(PartPrototype {
        name: "shield_emitter".to_string(),
        shapes: vec![Shape::Circle(Circle::new(
            Color::new(80, 160, 255),
            Point2f::new(0.0, 0.0),
            11.0,
        ))],
        stats: Stats {
            shield_max: 40.0,
            shield: 40.0,
            ..Stats::zeroed()
        },
    })?;

    registry.register_craft(CraftPrototype {
        name: "fighter".to_string(),
        parts: vec![
            PartPlacement {
                part: "hull".to_string(),
                offset: Vec2::zeros(),
                rotation: 0.0,
            },
            PartPlacement {
                part: "engine".to_string(),
                offset: Vec2::new(-2.0, 0.0),
                rotation: 0.0,
            },
            PartPlacement {
                part: "cannon".to_string(),
                offset: Vec2::new(7.0, 0.0),
                rotation: 0.0,
            },
            PartPlacement {
                part: "shield_emitter".to_string(),
                offset: Vec2::zeros(),
                rotation: 0.0,
            },
        ],
    });

    // Twin-cannon raider without a shield
    registry.register_craft(CraftPrototype {
        name: "marauder".to_string(),
        parts: vec![
            PartPlacement {
                part: "hull".to_string(),
                offset: Vec2::zeros(),
                rotation: 0.0,
            },
            PartPlacement {
                part: "engine".to_string(),
                offset: Vec2::new(-2.0, 0.0),
                rotation: 0.0,
            },
            PartPlacement {
                part: "cannon".to_string(),
                offset: Vec2::new(6.0, 2.0),
                rotation: 0.0,
            },
            PartPlacement {
                part: "cannon".to_string(),
                offset: Vec2::new(6.0, -2.0),
                rotation: 0.0,
            },
        ],
    });

    Ok(registry)
}
