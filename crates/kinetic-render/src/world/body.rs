use crate::coords::{Aabb, Geometry, Vec2};
use crate::paint::Style;

/// Stable identity of a simulation body.
///
/// Sprites are cached by this id; reusing an id for a different shape without
/// calling [`Renderer::forget_body`](crate::Renderer::forget_body) keeps the
/// old sprite.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BodyId(pub u64);

/// Renderer view of a simulation body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    /// Rotation in radians.
    pub angle: f32,
    pub geometry: Geometry,
    /// Overrides the layer's default style for this body's geometry kind.
    pub style: Option<Style>,
    pub hidden: bool,
}

impl Body {
    pub fn new(id: BodyId, geometry: Geometry) -> Self {
        Self {
            id,
            position: Vec2::zero(),
            angle: 0.0,
            geometry,
            style: None,
            hidden: false,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_style(mut self, style: impl Into<Style>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// World-space bounding box at the current position and angle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.geometry.aabb(self.angle).translated(self.position)
    }
}
