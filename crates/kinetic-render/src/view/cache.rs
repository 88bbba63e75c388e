use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, Result};
use tiny_skia::Pixmap;

use crate::coords::{Geometry, Vec2};
use crate::draw;
use crate::paint::{Color, Style, StyleRecord, StyleTable};
use crate::surface::Canvas;
use crate::world::{Body, BodyId};

use super::decode::load_pixmap;
use super::Sprite;

/// Cache namespace. Debug silhouettes never collide with regular sprites.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ViewKind {
    Main,
    Debug,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ViewKey {
    pub body: BodyId,
    pub kind: ViewKind,
}

/// Per-body sprite memo.
///
/// Entries are created on first draw and live until [`forget`](Self::forget).
/// Later style or geometry edits on the body are not observed.
#[derive(Debug, Default)]
pub struct ViewCache {
    views: HashMap<ViewKey, Rc<Sprite>>,
    builds: u64,
}

/// Side of the probe surface allocated when the cache is created.
const PROBE_SIZE: u32 = 100;

impl ViewCache {
    /// Creates the cache after checking that offscreen surfaces can be allocated.
    pub fn new() -> Result<Self> {
        Pixmap::new(PROBE_SIZE, PROBE_SIZE)
            .context("2D drawing backend unavailable: cannot allocate offscreen surface")?;
        Ok(Self::default())
    }

    /// Returns the body's sprite, building it on first request.
    ///
    /// The style is the body override, else the entry in `styles` for the
    /// geometry kind, else an empty record.
    pub fn get_or_build(&mut self, body: &Body, styles: &StyleTable) -> Rc<Sprite> {
        let key = ViewKey { body: body.id, kind: ViewKind::Main };
        if let Some(sprite) = self.views.get(&key) {
            return Rc::clone(sprite);
        }

        let style = match body.style.as_ref().or_else(|| styles.get(body.geometry.kind())) {
            Some(style) => style.clone(),
            None => Style::Styled(StyleRecord::default()),
        };

        self.insert(key, &body.geometry, &style)
    }

    /// Returns the body's translucent debug silhouette.
    pub fn get_or_build_debug(&mut self, body: &Body) -> Rc<Sprite> {
        let key = ViewKey { body: body.id, kind: ViewKind::Debug };
        if let Some(sprite) = self.views.get(&key) {
            return Rc::clone(sprite);
        }

        let style = Style::Solid(Color::from_straight(1.0, 0.0, 0.0, 0.5));
        self.insert(key, &body.geometry, &style)
    }

    #[inline]
    pub fn get(&self, body: BodyId, kind: ViewKind) -> Option<Rc<Sprite>> {
        self.views.get(&ViewKey { body, kind }).cloned()
    }

    /// Drops every sprite of `body`. Returns whether anything was cached.
    pub fn forget(&mut self, body: BodyId) -> bool {
        let main = self.views.remove(&ViewKey { body, kind: ViewKind::Main }).is_some();
        let debug = self.views.remove(&ViewKey { body, kind: ViewKind::Debug }).is_some();
        main || debug
    }

    pub fn clear(&mut self) {
        self.views.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Number of sprites built since creation (cache misses).
    #[inline]
    pub fn builds(&self) -> u64 {
        self.builds
    }

    fn insert(&mut self, key: ViewKey, geometry: &Geometry, style: &Style) -> Rc<Sprite> {
        let sprite = Rc::new(create_view(geometry, style));
        self.builds += 1;
        log::debug!(
            "built {:?} sprite for body {} ({}x{})",
            key.kind,
            key.body.0,
            sprite.width(),
            sprite.height()
        );
        self.views.insert(key, Rc::clone(&sprite));
        sprite
    }
}

/// Builds a sprite for `geometry` drawn with `style`.
///
/// The offscreen surface is the geometry's bounding box grown by one pixel on
/// every side plus `trunc(2 * line_width)` per dimension. The body origin is
/// drawn at `(hw + 1 + trunc(line_width), hh + 1 + trunc(line_width))`.
pub fn create_view(geometry: &Geometry, style: &Style) -> Sprite {
    if let Some(record) = style.as_record() {
        if let Some(source) = &record.image_source {
            return image_view(source, record);
        }
    }

    let aabb = geometry.aabb(0.0);
    let hw = aabb.hw + aabb.x.abs();
    let hh = aabb.hh + aabb.y.abs();
    let pad = style.line_padding();
    let extent = style.line_extent();

    let width = (2.0 * hw + 2.0 + extent) as u32;
    let height = (2.0 * hh + 2.0 + extent) as u32;

    let mut canvas = match Canvas::new(width, height) {
        Ok(canvas) => canvas,
        Err(err) => {
            log::error!("sprite allocation failed: {err:#}");
            return Sprite::blank(width as f32, height as f32);
        }
    };

    canvas.translate(hw + 1.0 + pad, hh + 1.0 + pad);

    match geometry {
        Geometry::Circle { radius } => draw::draw_circle(&mut canvas, Vec2::zero(), *radius, style),
        Geometry::ConvexPolygon { vertices } => draw::draw_polygon(&mut canvas, vertices, style),
        // No primitive; the sprite stays blank.
        Geometry::Point => {}
    }

    if let Some(color) = style.angle_indicator() {
        draw::draw_line(&mut canvas, Vec2::zero(), Vec2::new(hw, 0.0), &Style::Solid(color));
    }

    Sprite::from_pixmap(canvas.into_pixmap())
}

fn image_view(source: &std::path::Path, record: &StyleRecord) -> Sprite {
    match load_pixmap(source) {
        Ok(pixmap) => Sprite::from_pixmap(pixmap).with_display_size(record.width, record.height),
        Err(err) => {
            log::warn!("image sprite unavailable: {err:#}");
            Sprite::blank(record.width.unwrap_or(1.0), record.height.unwrap_or(1.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::palette;

    fn circle_body(id: u64, radius: f32) -> Body {
        Body::new(BodyId(id), Geometry::circle(radius))
    }

    // ── caching ───────────────────────────────────────────────────────────

    #[test]
    fn second_request_returns_same_sprite() {
        let mut cache = ViewCache::new().unwrap();
        let body = circle_body(1, 10.0);
        let styles = StyleTable::default();

        let a = cache.get_or_build(&body, &styles);
        let b = cache.get_or_build(&body, &styles);

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn sprite_identity_survives_style_mutation() {
        let mut cache = ViewCache::new().unwrap();
        let styles = StyleTable::default();
        let mut body = circle_body(1, 10.0);

        let before = cache.get_or_build(&body, &styles);
        body.style = Some(Style::Styled(StyleRecord::filled(palette::pink(), 6.0)));
        body.geometry = Geometry::circle(40.0);
        let after = cache.get_or_build(&body, &styles);

        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.width(), 24.0);
    }

    #[test]
    fn forget_drops_both_namespaces() {
        let mut cache = ViewCache::new().unwrap();
        let body = circle_body(3, 5.0);
        let first = cache.get_or_build(&body, &StyleTable::default());
        cache.get_or_build_debug(&body);
        assert_eq!(cache.len(), 2);

        assert!(cache.forget(body.id));
        assert!(cache.is_empty());
        assert!(!cache.forget(body.id));

        let rebuilt = cache.get_or_build(&body, &StyleTable::default());
        assert!(!Rc::ptr_eq(&first, &rebuilt));
        assert_eq!(cache.builds(), 3);
    }

    #[test]
    fn debug_sprite_is_separate_from_main() {
        let mut cache = ViewCache::new().unwrap();
        let body = circle_body(4, 5.0);
        let main = cache.get_or_build(&body, &StyleTable::default());
        let debug = cache.get_or_build_debug(&body);
        assert!(!Rc::ptr_eq(&main, &debug));
        assert!(Rc::ptr_eq(&debug, &cache.get(body.id, ViewKind::Debug).unwrap()));
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn sprite_size_pads_line_width_and_one_pixel() {
        let style = Style::Styled(StyleRecord::filled(palette::violet(), 2.0));
        let sprite = create_view(&Geometry::circle(10.0), &style);
        assert_eq!((sprite.width(), sprite.height()), (26.0, 26.0));
        assert_eq!(sprite.image().map(|p| (p.width(), p.height())), Some((26, 26)));
    }

    #[test]
    fn fractional_line_width_truncates_doubled_width() {
        let style = Style::Styled(StyleRecord::filled(palette::violet(), 2.5));
        let sprite = create_view(&Geometry::circle(10.0), &style);
        assert_eq!((sprite.width(), sprite.height()), (27.0, 27.0));
        assert_eq!(sprite.image().map(|p| (p.width(), p.height())), Some((27, 27)));
    }

    #[test]
    fn polygon_sprite_uses_half_extents() {
        let style = Style::Styled(StyleRecord::filled(palette::violet(), 1.0));
        let sprite = create_view(&Geometry::rectangle(30.0, 10.0), &style);
        assert_eq!((sprite.width(), sprite.height()), (34.0, 14.0));
    }

    #[test]
    fn solid_style_reserves_no_line_padding() {
        let sprite = create_view(&Geometry::circle(10.0), &Style::Solid(palette::gold()));
        assert_eq!(sprite.width(), 22.0);
    }

    #[test]
    fn fallback_style_is_used_without_override() {
        let mut cache = ViewCache::new().unwrap();
        let mut styles = StyleTable::empty();
        styles.set(crate::coords::GeometryKind::Circle, StyleRecord::filled(palette::gold(), 3.0));

        let sprite = cache.get_or_build(&circle_body(9, 10.0), &styles);
        assert_eq!(sprite.width(), 28.0);
    }

    // ── content ───────────────────────────────────────────────────────────

    #[test]
    fn circle_sprite_is_centered() {
        let style = Style::Styled(StyleRecord::filled(palette::violet(), 2.0));
        let sprite = create_view(&Geometry::circle(10.0), &style);
        let image = sprite.image().unwrap();
        assert_eq!(image.pixel(13, 13).unwrap().alpha(), 255);
        assert_eq!(image.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn angle_indicator_marks_positive_x() {
        let style = Style::Styled(
            StyleRecord { line_width: 1.0, ..StyleRecord::default() }
                .with_angle_indicator(palette::white()),
        );
        let sprite = create_view(&Geometry::circle(10.0), &style);
        let image = sprite.image().unwrap();
        // Fill and stroke are transparent; only the tick is visible.
        assert!(image.pixel(18, 12).unwrap().alpha() > 0);
        assert_eq!(image.pixel(6, 12).unwrap().alpha(), 0);
    }

    #[test]
    fn point_geometry_yields_blank_sprite() {
        let mut cache = ViewCache::new().unwrap();
        let body = Body::new(BodyId(5), Geometry::Point);
        let sprite = cache.get_or_build(&body, &StyleTable::default());

        assert_eq!((sprite.width(), sprite.height()), (2.0, 2.0));
        assert!(sprite.image().unwrap().data().iter().all(|&b| b == 0));
    }

    // ── image sources ─────────────────────────────────────────────────────

    #[test]
    fn image_source_is_used_directly() {
        let path = std::env::temp_dir().join(format!("kinetic-sprite-{}.png", std::process::id()));
        let mut canvas = Canvas::new(8, 4).unwrap();
        canvas.fill(palette::orange());
        canvas.save_png(&path).unwrap();

        let style = Style::Styled(StyleRecord::default().with_image(&path));
        let natural = create_view(&Geometry::circle(50.0), &style);
        assert_eq!((natural.width(), natural.height()), (8.0, 4.0));

        let sized = Style::Styled(StyleRecord::default().with_image(&path).with_size(16.0, 16.0));
        let scaled = create_view(&Geometry::circle(50.0), &sized);
        assert_eq!((scaled.width(), scaled.height()), (16.0, 16.0));
        assert_eq!(scaled.image().map(|p| p.width()), Some(8));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_image_gives_blank_sprite() {
        let style = Style::Styled(
            StyleRecord::default().with_image("/nope/missing.png").with_size(12.0, 6.0),
        );
        let sprite = create_view(&Geometry::circle(5.0), &style);
        assert!(sprite.image().is_none());
        assert_eq!((sprite.width(), sprite.height()), (12.0, 6.0));
    }
}
