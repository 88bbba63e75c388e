use super::Vec2;

/// Axis-aligned bounding box stored as center + half extents.
///
/// For a geometry, `x`/`y` are the offset of the box center from the body
/// origin; for a body they are world coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub hw: f32,
    pub hh: f32,
}

impl Aabb {
    #[inline]
    pub const fn new(x: f32, y: f32, hw: f32, hh: f32) -> Self {
        Self { x, y, hw, hh }
    }

    /// Smallest box containing every point. Empty input yields a zero box.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };

        let (mut min, mut max) = (first, first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self {
            x: (min.x + max.x) * 0.5,
            y: (min.y + max.y) * 0.5,
            hw: (max.x - min.x) * 0.5,
            hh: (max.y - min.y) * 0.5,
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x - self.hw, self.y - self.hh)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x + self.hw, self.y + self.hh)
    }

    #[inline]
    pub fn translated(self, by: Vec2) -> Self {
        Self { x: self.x + by.x, y: self.y + by.y, ..self }
    }
}
