//! Spacecraft parts
//!
//! A part is owned by exactly one spacecraft: a local offset and rotation
//! relative to the hull, its own shapes, and its slice of the stats. Parts
//! are deep-copied out of prototypes at assembly so sibling crafts never
//! alias shape data.

use crate::entity::Stats;
use crate::foundation::math::{Iso2, Point2f, Vec2};
use crate::geometry::Shape;
use crate::spacecraft::prototype::PartPrototype;

/// One building block of a spacecraft
#[derive(Debug, Clone)]
pub struct Part {
    /// Offset from the spacecraft origin, in craft-local space
    pub offset: Vec2,
    /// Rotation relative to the spacecraft, in radians
    pub rotation: f32,
    /// Shapes in part-local space, with derived world-space state
    pub shapes: Vec<Shape>,
    /// This part's stats contribution
    pub stats: Stats,
}

impl Part {
    /// Instantiate a part from a prototype at the given placement
    pub fn from_prototype(prototype: &PartPrototype, offset: Vec2, rotation: f32) -> Self {
        Self {
            offset,
            rotation,
            shapes: prototype.shapes.clone(),
            stats: prototype.stats.clone(),
        }
    }

    /// Per-tick upkeep: weapon cooldown decay
    pub fn tick(&mut self, dt: f32) {
        self.stats.tick_cooldown(dt);
    }

    /// Recompute world-space shapes from the owning craft's transform
    pub fn apply_transform(&mut self, craft: &Iso2) {
        let world = craft * Iso2::new(self.offset, self.rotation);
        for shape in &mut self.shapes {
            shape.apply_transform(&world);
        }
    }

    /// World-space position of the part origin (the muzzle, for weapons)
    pub fn world_origin(&self, craft: &Iso2) -> Point2f {
        craft.transform_point(&Point2f::from(self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::HALF_PI, Color};
    use crate::geometry::Line;
    use approx::assert_relative_eq;

    fn cannon_prototype() -> PartPrototype {
        PartPrototype {
            name: "test_cannon".to_string(),
            shapes: vec![Shape::Line(Line::new(
                Color::GREEN,
                Point2f::new(0.0, 0.0),
                Point2f::new(4.0, 0.0),
            ))],
            stats: Stats {
                attack: 10.0,
                attack_cooldown_max: 0.5,
                ..Stats::zeroed()
            },
        }
    }

    #[test]
    fn test_instances_do_not_alias_prototype_shapes() {
        let prototype = cannon_prototype();
        let mut a = Part::from_prototype(&prototype, Vec2::zeros(), 0.0);
        let b = Part::from_prototype(&prototype, Vec2::zeros(), 0.0);

        a.apply_transform(&Iso2::new(Vec2::new(100.0, 0.0), 0.0));

        let (a_start, _) = a.shapes[0].world_segment().unwrap();
        let (b_start, _) = b.shapes[0].world_segment().unwrap();
        assert_relative_eq!(a_start, Point2f::new(100.0, 0.0));
        assert_relative_eq!(b_start, Point2f::new(0.0, 0.0));
    }

    #[test]
    fn test_transform_composes_part_offset() {
        let prototype = cannon_prototype();
        let mut part = Part::from_prototype(&prototype, Vec2::new(2.0, 0.0), 0.0);

        // Craft rotated a quarter turn: the part offset swings onto the y axis
        part.apply_transform(&Iso2::new(Vec2::zeros(), HALF_PI));

        let (start, end) = part.shapes[0].world_segment().unwrap();
        assert_relative_eq!(start, Point2f::new(0.0, 2.0), epsilon = 1e-5);
        assert_relative_eq!(end, Point2f::new(0.0, 6.0), epsilon = 1e-4);
    }

    #[test]
    fn test_cooldown_ticks_down() {
        let prototype = cannon_prototype();
        let mut part = Part::from_prototype(&prototype, Vec2::zeros(), 0.0);
        part.stats.reset_cooldown();
        part.tick(0.2);
        assert_relative_eq!(part.stats.attack_cooldown, 0.3);
    }
}
