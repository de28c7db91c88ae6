//! Background stars
//!
//! Stars are positioned-only scenery living outside the world's role
//! indices. Each carries a depth layer; the renderer divides by it for the
//! parallax projection, and calls [`Star::reset`] whenever a star scrolls
//! out of view. The core owns the reset computation, not when it runs.

use rand::Rng;

use crate::entity::capability::Positioned;
use crate::foundation::math::{Color, Point2f, Vec2};

/// Number of depth layers in a generated starfield
pub const DEPTH_LAYERS: u32 = 100;

/// A single background star
#[derive(Debug, Clone)]
pub struct Star {
    /// World-space position
    pub position: Point2f,
    /// Depth layer, 1.0 (nearest) and up
    pub depth: f32,
    /// Shade derived from the depth layer
    pub color: Color,
}

impl Star {
    /// Create a star on a depth layer; nearer layers render brighter
    pub fn new(position: Point2f, depth: f32) -> Self {
        let shade = (255.0 - 2.0 * (depth - 1.0)).clamp(0.0, 255.0) as u8;
        Self {
            position,
            depth,
            color: Color::grey(shade),
        }
    }

    /// Reposition a star that left the view by reflecting it through the
    /// camera position
    ///
    /// Doubling the camera-to-star vector lands the star the same distance
    /// past the camera on the opposite side, so it re-enters ahead of the
    /// scroll direction.
    pub fn reset(&mut self, camera: Point2f) {
        let v = camera - self.position;
        self.position += v * 2.0;
    }
}

impl Positioned for Star {
    fn position(&self) -> Point2f {
        self.position
    }

    fn rotation(&self) -> f32 {
        0.0
    }
}

/// The parallax star background
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    /// All stars, ordered by depth layer
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Generate a starfield sized to the given view extent
    ///
    /// Layer z gets z stars spread over a region z times the extent, so deep
    /// layers are both wider and denser and the parallax projection fills
    /// the screen evenly.
    pub fn generate(extent: Vec2, rng: &mut impl Rng) -> Self {
        let mut stars = Vec::new();
        for z in 1..=DEPTH_LAYERS {
            let depth = z as f32;
            for _ in 0..z {
                let x = (rng.gen::<f32>() - 0.5) * depth * extent.x;
                let y = (rng.gen::<f32>() - 0.5) * depth * extent.y;
                stars.push(Star::new(Point2f::new(x, y), depth));
            }
        }
        Self { stars }
    }
}
