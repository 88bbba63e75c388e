//! Coordinate and geometry types.
//!
//! Canonical space:
//! - world units, 1 unit = 1 pixel at layer scale 1
//! - origin top-left of a surface
//! - +X right, +Y down, positive angles turn clockwise on screen

mod aabb;
mod geometry;
mod vec2;

pub use aabb::Aabb;
pub use geometry::{Geometry, GeometryKind};
pub use vec2::Vec2;
