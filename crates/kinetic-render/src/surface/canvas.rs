use std::path::Path;

use anyhow::{Context, Result};
use tiny_skia::{FillRule, FilterQuality, Paint, Path as SkPath, Pixmap, PixmapPaint, Stroke, Transform};

use crate::paint::Color;
use crate::view::Sprite;

/// Software drawing surface with a save/restore transform stack.
///
/// Mirrors the 2D-canvas model: transforms compose onto the current matrix,
/// and resizing discards the content.
pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
    saved: Vec<Transform>,
}

impl Canvas {
    /// Allocates a transparent `width × height` canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} canvas"))?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Reallocates the backing store. Content and transforms are reset.
    ///
    /// Zero dimensions are raised to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        match Pixmap::new(width, height) {
            Some(pixmap) => {
                self.pixmap = pixmap;
                self.transform = Transform::identity();
                self.saved.clear();
            }
            None => log::warn!("canvas resize to {width}x{height} failed; keeping {:?}", self.size()),
        }
    }

    /// Clears every pixel to transparent. Transforms are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    #[inline]
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    // ── transform stack ───────────────────────────────────────────────────

    #[inline]
    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Pops the last saved transform. Unbalanced calls are ignored.
    #[inline]
    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    #[inline]
    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform.pre_translate(x, y);
    }

    /// Rotates by `angle` radians.
    #[inline]
    pub fn rotate(&mut self, angle: f32) {
        self.transform = self.transform.pre_concat(Transform::from_rotate(angle.to_degrees()));
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.transform = self.transform.pre_scale(factor, factor);
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[inline]
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub(crate) fn stroke_path(&mut self, path: &SkPath, color: Color, width: f32) {
        let paint = solid_paint(color);
        let stroke = Stroke { width, ..Stroke::default() };
        self.pixmap.stroke_path(path, &paint, &stroke, self.transform, None);
    }

    pub(crate) fn fill_path(&mut self, path: &SkPath, color: Color) {
        let paint = solid_paint(color);
        self.pixmap.fill_path(path, &paint, FillRule::Winding, self.transform, None);
    }

    /// Draws `sprite` centered on the current origin.
    ///
    /// Sprites with a display size different from their image are scaled.
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        let Some(image) = sprite.image() else {
            return;
        };

        let sx = sprite.width() / image.width() as f32;
        let sy = sprite.height() / image.height() as f32;
        let transform = self
            .transform
            .pre_translate(-sprite.width() * 0.5, -sprite.height() * 0.5)
            .pre_scale(sx, sy);

        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
        self.pixmap.draw_pixmap(0, 0, image.as_ref(), &paint, transform, None);
    }

    // ── pixel access ──────────────────────────────────────────────────────

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    #[inline]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Alpha of the pixel at `(x, y)`, or 0 outside the canvas.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixmap.pixel(x, y).map_or(0, |p| p.alpha())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed writing {}", path.display()))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("saved", &self.saved.len())
            .finish()
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}
