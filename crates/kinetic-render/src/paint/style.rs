use std::collections::HashMap;
use std::path::PathBuf;

use crate::coords::GeometryKind;

use super::{palette, Color};

/// Structured drawing style.
///
/// `image_source` replaces rasterization entirely: the sprite is the decoded
/// image, optionally displayed at `width × height`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    pub stroke_color: Color,
    pub fill_color: Color,
    /// Stroke width. `<= 0` disables the stroke.
    pub line_width: f32,
    /// Color of the radial tick marking the body's angle, if any.
    pub angle_indicator: Option<Color>,
    pub image_source: Option<PathBuf>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl StyleRecord {
    /// Stroke and fill in one color.
    pub fn filled(color: Color, line_width: f32) -> Self {
        Self { stroke_color: color, fill_color: color, line_width, ..Self::default() }
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_angle_indicator(mut self, color: Color) -> Self {
        self.angle_indicator = Some(color);
        self
    }

    pub fn with_image(mut self, source: impl Into<PathBuf>) -> Self {
        self.image_source = Some(source.into());
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self {
            stroke_color: Color::transparent(),
            fill_color: Color::transparent(),
            line_width: 0.0,
            angle_indicator: None,
            image_source: None,
            width: None,
            height: None,
        }
    }
}

/// Drawing style: a bare color or a full record.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    /// Stroke and fill in one color at line width 1.
    Solid(Color),
    Styled(StyleRecord),
}

impl Style {
    /// Whole-pixel shift of the sprite origin past the stroke, `trunc(lw)`.
    ///
    /// Bare colors reserve none even though they stroke at width 1.
    pub fn line_padding(&self) -> f32 {
        match self {
            Style::Solid(_) => 0.0,
            Style::Styled(r) => r.line_width.max(0.0).trunc(),
        }
    }

    /// Whole pixels added to each sprite dimension for the stroke, `trunc(2 * lw)`.
    pub fn line_extent(&self) -> f32 {
        match self {
            Style::Solid(_) => 0.0,
            Style::Styled(r) => (2.0 * r.line_width.max(0.0)).trunc(),
        }
    }

    pub fn angle_indicator(&self) -> Option<Color> {
        match self {
            Style::Solid(_) => None,
            Style::Styled(r) => r.angle_indicator,
        }
    }

    pub fn as_record(&self) -> Option<&StyleRecord> {
        match self {
            Style::Solid(_) => None,
            Style::Styled(r) => Some(r),
        }
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::Solid(color)
    }
}

impl From<StyleRecord> for Style {
    fn from(record: StyleRecord) -> Self {
        Style::Styled(record)
    }
}

/// Default style per geometry kind.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: HashMap<GeometryKind, Style>,
}

impl StyleTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self { styles: HashMap::new() }
    }

    #[inline]
    pub fn get(&self, kind: GeometryKind) -> Option<&Style> {
        self.styles.get(&kind)
    }

    pub fn set(&mut self, kind: GeometryKind, style: impl Into<Style>) {
        self.styles.insert(kind, style.into());
    }

    /// Overlays every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &StyleTable) {
        for (kind, style) in &other.styles {
            self.styles.insert(*kind, style.clone());
        }
    }
}

impl Default for StyleTable {
    /// Circles in blue, convex polygons in violet, both with a white angle tick.
    fn default() -> Self {
        let mut table = Self::empty();
        table.set(
            GeometryKind::Circle,
            StyleRecord::filled(palette::blue(), 1.0).with_angle_indicator(palette::white()),
        );
        table.set(
            GeometryKind::ConvexPolygon,
            StyleRecord::filled(palette::violet(), 1.0).with_angle_indicator(palette::white()),
        );
        table
    }
}
