use super::{Aabb, Vec2};

/// Geometry kind, used to look up default styles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Point,
    Circle,
    ConvexPolygon,
}

impl GeometryKind {
    pub const fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "point",
            GeometryKind::Circle => "circle",
            GeometryKind::ConvexPolygon => "convex-polygon",
        }
    }
}

/// Immutable shape descriptor of a body, in body-local coordinates.
///
/// `Point` has no extent and no drawing primitive; its sprite is blank.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point,
    Circle { radius: f32 },
    ConvexPolygon { vertices: Vec<Vec2> },
}

impl Geometry {
    #[inline]
    pub fn circle(radius: f32) -> Self {
        Geometry::Circle { radius }
    }

    #[inline]
    pub fn convex_polygon(vertices: impl Into<Vec<Vec2>>) -> Self {
        Geometry::ConvexPolygon { vertices: vertices.into() }
    }

    /// Axis-aligned rectangle of `width × height` centered on the origin.
    pub fn rectangle(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        Geometry::convex_polygon(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point => GeometryKind::Point,
            Geometry::Circle { .. } => GeometryKind::Circle,
            Geometry::ConvexPolygon { .. } => GeometryKind::ConvexPolygon,
        }
    }

    /// Bounding box of the shape rotated by `angle` radians about the body origin.
    pub fn aabb(&self, angle: f32) -> Aabb {
        match self {
            Geometry::Point => Aabb::default(),
            Geometry::Circle { radius } => Aabb::new(0.0, 0.0, *radius, *radius),
            Geometry::ConvexPolygon { vertices } => {
                if angle == 0.0 {
                    Aabb::from_points(vertices.iter().copied())
                } else {
                    Aabb::from_points(vertices.iter().map(|v| v.rotated(angle)))
                }
            }
        }
    }
}
