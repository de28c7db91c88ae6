//! Geometry kernel
//!
//! Shapes are stored in local (model) space and carry a derived world-space
//! representation that the owning entity refreshes every tick; collision
//! tests only ever look at the world-space data.
//!
//! # Key Types
//!
//! - [`Shape`] - Local-space shape with its derived world-space twin
//! - [`Line`], [`Circle`] - The two shape primitives
//! - [`intersect_segments`] - The segment-segment intersection test collision
//!   resolution is built on

pub mod intersect;
pub mod shape;

pub use intersect::{intersect_segments, DEFAULT_PARALLEL_EPSILON};
pub use shape::{Circle, Line, Shape};
