use crate::paint::{Color, Style};

/// Stroke/fill parameters after style application.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub stroke: Color,
    pub fill: Color,
    pub line_width: f32,
}

impl Brush {
    /// Applies `style`.
    ///
    /// A bare color strokes and fills at width 1. A record without a positive
    /// line width gets a transparent stroke whatever its stroke color says.
    pub fn from_style(style: &Style) -> Self {
        match style {
            Style::Solid(color) => Self { stroke: *color, fill: *color, line_width: 1.0 },
            Style::Styled(r) => Self {
                stroke: if r.line_width > 0.0 { r.stroke_color } else { Color::transparent() },
                fill: r.fill_color,
                line_width: r.line_width,
            },
        }
    }
}
