//! Stateless shape primitives.
//!
//! Every primitive applies its style, then strokes and fills the path,
//! in that order, under the canvas' current transform. These run when sprites
//! are built and for debug overlays, never per body per frame.

mod brush;

pub use brush::Brush;

use tiny_skia::{Path, PathBuilder, Rect};

use crate::coords::Vec2;
use crate::paint::Style;
use crate::surface::Canvas;

pub fn draw_circle(canvas: &mut Canvas, center: Vec2, radius: f32, style: &Style) {
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
        stroke_and_fill(canvas, &path, style);
    }
}

/// Draws a polygon through `vertices`, closed when there are at least three.
pub fn draw_polygon(canvas: &mut Canvas, vertices: &[Vec2], style: &Style) {
    let Some((first, rest)) = vertices.split_first() else {
        return;
    };

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for v in rest {
        pb.line_to(v.x, v.y);
    }
    if vertices.len() > 2 {
        pb.close();
    }

    // A lone vertex yields no path.
    if let Some(path) = pb.finish() {
        stroke_and_fill(canvas, &path, style);
    }
}

/// Draws a `width × height` rectangle centered on `center`.
pub fn draw_rect(canvas: &mut Canvas, center: Vec2, width: f32, height: f32, style: &Style) {
    let Some(rect) = Rect::from_xywh(center.x - width * 0.5, center.y - height * 0.5, width, height)
    else {
        return;
    };
    stroke_and_fill(canvas, &PathBuilder::from_rect(rect), style);
}

pub fn draw_line(canvas: &mut Canvas, from: Vec2, to: Vec2, style: &Style) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    if let Some(path) = pb.finish() {
        stroke_and_fill(canvas, &path, style);
    }
}

fn stroke_and_fill(canvas: &mut Canvas, path: &Path, style: &Style) {
    let brush = Brush::from_style(style);
    canvas.stroke_path(path, brush.stroke, brush.line_width.max(0.0));
    canvas.fill_path(path, brush.fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{palette, StyleRecord};

    fn canvas() -> Canvas {
        Canvas::new(40, 40).unwrap()
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_fills_center_not_corner() {
        let mut c = canvas();
        draw_circle(&mut c, Vec2::new(20.0, 20.0), 8.0, &Style::Solid(palette::blue()));
        assert_eq!(c.alpha_at(20, 20), 255);
        assert_eq!(c.alpha_at(2, 2), 0);
    }

    #[test]
    fn transparent_fill_without_line_width_draws_nothing() {
        let mut c = canvas();
        let style = Style::Styled(
            StyleRecord { line_width: 0.0, ..StyleRecord::default() }.with_stroke(palette::pink()),
        );
        draw_circle(&mut c, Vec2::new(20.0, 20.0), 8.0, &style);
        assert!(c.pixmap().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn stroke_only_ring_leaves_center_empty() {
        let mut c = canvas();
        let style = Style::Styled(StyleRecord {
            stroke_color: palette::gold(),
            line_width: 2.0,
            ..StyleRecord::default()
        });
        draw_circle(&mut c, Vec2::new(20.0, 20.0), 10.0, &style);
        assert_eq!(c.alpha_at(20, 20), 0);
        assert!(c.alpha_at(30, 20) > 0);
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn polygon_triangle_is_filled() {
        let mut c = canvas();
        let verts = [Vec2::new(5.0, 5.0), Vec2::new(35.0, 5.0), Vec2::new(5.0, 35.0)];
        draw_polygon(&mut c, &verts, &Style::Solid(palette::violet()));
        assert_eq!(c.alpha_at(10, 10), 255);
        assert_eq!(c.alpha_at(33, 33), 0);
    }

    #[test]
    fn polygon_degenerate_inputs_are_noops() {
        let mut c = canvas();
        draw_polygon(&mut c, &[], &Style::Solid(palette::violet()));
        draw_polygon(&mut c, &[Vec2::new(3.0, 3.0)], &Style::Solid(palette::violet()));
        assert!(c.pixmap().data().iter().all(|&b| b == 0));
    }

    // ── rect / line ───────────────────────────────────────────────────────

    #[test]
    fn rect_is_centered() {
        let mut c = canvas();
        draw_rect(&mut c, Vec2::new(20.0, 20.0), 10.0, 4.0, &Style::Solid(palette::orange()));
        assert_eq!(c.alpha_at(16, 20), 255);
        assert_eq!(c.alpha_at(20, 25), 0);
    }

    #[test]
    fn line_is_visible() {
        let mut c = canvas();
        draw_line(&mut c, Vec2::new(0.0, 20.5), Vec2::new(40.0, 20.5), &Style::Solid(palette::white()));
        assert!(c.alpha_at(10, 20) > 0);
        assert_eq!(c.alpha_at(10, 5), 0);
    }

    #[test]
    fn primitives_respect_canvas_transform() {
        let mut c = canvas();
        c.translate(20.0, 20.0);
        draw_circle(&mut c, Vec2::zero(), 5.0, &Style::Solid(palette::blue()));
        assert_eq!(c.alpha_at(20, 20), 255);
        assert_eq!(c.alpha_at(2, 2), 0);
    }
}
