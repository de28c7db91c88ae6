//! Shape primitives with local-space data and derived world-space state
//!
//! Every shape holds two sets of coordinates: the local-space geometry fixed
//! at construction, and the world-space ("real") geometry recomputed from the
//! owner's transform each tick. The world-space fields are garbage until the
//! first transform pass runs.

use crate::foundation::math::{Color, Iso2, Point2f};

/// A line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Render color
    pub color: Color,
    /// Local-space start point
    pub start: Point2f,
    /// Local-space end point
    pub end: Point2f,
    /// Derived world-space start point
    pub world_start: Point2f,
    /// Derived world-space end point
    pub world_end: Point2f,
}

impl Line {
    /// Create a line from local-space endpoints
    ///
    /// The world-space endpoints start out as a copy of the local ones and
    /// only become meaningful once [`Line::apply_transform`] has run.
    pub fn new(color: Color, start: Point2f, end: Point2f) -> Self {
        Self {
            color,
            start,
            end,
            world_start: start,
            world_end: end,
        }
    }

    /// Recompute the world-space endpoints from the owner's transform
    pub fn apply_transform(&mut self, transform: &Iso2) {
        self.world_start = transform.transform_point(&self.start);
        self.world_end = transform.transform_point(&self.end);
    }
}

/// A circle
///
/// Carries world-space state like every other shape but participates in no
/// collision test yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Render color
    pub color: Color,
    /// Local-space center
    pub center: Point2f,
    /// Radius
    pub radius: f32,
    /// Derived world-space center
    pub world_center: Point2f,
}

impl Circle {
    /// Create a circle from a local-space center and radius
    pub fn new(color: Color, center: Point2f, radius: f32) -> Self {
        Self {
            color,
            center,
            radius,
            world_center: center,
        }
    }

    /// Recompute the world-space center from the owner's transform
    pub fn apply_transform(&mut self, transform: &Iso2) {
        self.world_center = transform.transform_point(&self.center);
    }
}

/// Shape primitives an entity can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A line segment
    Line(Line),
    /// A circle (reserved for future collision kinds)
    Circle(Circle),
}

impl Shape {
    /// Recompute the derived world-space geometry from the owner's transform
    pub fn apply_transform(&mut self, transform: &Iso2) {
        match self {
            Self::Line(line) => line.apply_transform(transform),
            Self::Circle(circle) => circle.apply_transform(transform),
        }
    }

    /// World-space segment endpoints, if this shape is a line
    pub fn world_segment(&self) -> Option<(Point2f, Point2f)> {
        match self {
            Self::Line(line) => Some((line.world_start, line.world_end)),
            Self::Circle(_) => None,
        }
    }

    /// Render color
    pub fn color(&self) -> Color {
        match self {
            Self::Line(line) => line.color,
            Self::Circle(circle) => circle.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::HALF_PI, Vec2};
    use approx::assert_relative_eq;

    #[test]
    fn test_line_transform_rotates_then_translates() {
        let mut line = Line::new(Color::GREEN, Point2f::new(1.0, 0.0), Point2f::new(2.0, 0.0));
        let transform = Iso2::new(Vec2::new(10.0, 5.0), HALF_PI);

        line.apply_transform(&transform);

        assert_relative_eq!(line.world_start, Point2f::new(10.0, 6.0), epsilon = 1e-5);
        assert_relative_eq!(line.world_end, Point2f::new(10.0, 7.0), epsilon = 1e-5);
        // Local geometry is untouched
        assert_relative_eq!(line.start, Point2f::new(1.0, 0.0));
    }

    #[test]
    fn test_circle_transform_moves_center_only() {
        let mut circle = Circle::new(Color::WHITE, Point2f::new(0.0, 1.0), 4.0);
        let transform = Iso2::new(Vec2::new(3.0, 0.0), 0.0);

        circle.apply_transform(&transform);

        assert_relative_eq!(circle.world_center, Point2f::new(3.0, 1.0), epsilon = 1e-5);
        assert_relative_eq!(circle.radius, 4.0);
    }

    #[test]
    fn test_world_segment_only_for_lines() {
        let line = Shape::Line(Line::new(
            Color::GREEN,
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 1.0),
        ));
        let circle = Shape::Circle(Circle::new(Color::GREEN, Point2f::origin(), 1.0));

        assert!(line.world_segment().is_some());
        assert!(circle.world_segment().is_none());
    }
}
