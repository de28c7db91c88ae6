//! Math utilities and types
//!
//! Provides the fundamental 2D math types the simulation is written in terms
//! of, plus the angle arithmetic used by steering and rotation targets.

pub use nalgebra::{Isometry2, Point2, UnitComplex, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2f = Point2<f32>;

/// Rigid 2D transform (rotation followed by translation)
pub type Iso2 = Isometry2<f32>;

/// 2D rotation type
pub type Rot2 = UnitComplex<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Normalize an angle into the range [0, 2π)
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(constants::TAU)
}

/// Wrap an angle difference onto the shortest arc, into (−π, π]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(constants::TAU);
    if wrapped > constants::PI {
        wrapped - constants::TAU
    } else {
        wrapped
    }
}

/// Unit vector pointing along the given angle
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// RGB color as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform grey of the given brightness
    pub const fn grey(shade: u8) -> Self {
        Self::new(shade, shade, shade)
    }

    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Hull green
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Warning red
    pub const RED: Self = Self::new(255, 0, 0);
}
