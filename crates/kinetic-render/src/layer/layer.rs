use crate::coords::Vec2;
use crate::draw;
use crate::paint::{Color, Style, StyleTable};
use crate::surface::{Canvas, Surface, SurfaceId};
use crate::view::{Sprite, ViewCache};
use crate::world::{Body, BodyId, World};

use super::{LayerConfig, LayerError, LayerOffset, SortKey};

/// A named surface with its own camera and body stack.
///
/// An empty stack draws every body of the world; a non-empty one draws exactly
/// the listed bodies, in order.
#[derive(Debug)]
pub struct Layer {
    id: String,
    surface: Surface,
    config: LayerConfig,
    stack: Vec<BodyId>,
    styles: StyleTable,
    debug: bool,
    order: u32,
}

impl Layer {
    pub(crate) fn new(
        id: String,
        mut surface: Surface,
        mut config: LayerConfig,
        styles: StyleTable,
        debug: bool,
        order: u32,
    ) -> Self {
        if surface.canvas.size() != (config.width, config.height) {
            surface.canvas.resize(config.width, config.height);
            (config.width, config.height) = surface.canvas.size();
        }
        Self { id, surface, config, stack: Vec::new(), styles, debug, order }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn surface_id(&self) -> SurfaceId {
        self.surface.id
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.surface.canvas
    }

    /// Direct access for manual layers and custom overlays.
    #[inline]
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.surface.canvas
    }

    #[inline]
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    #[inline]
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.config.z_index, self.order)
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn set_follow(&mut self, body: Option<BodyId>) -> &mut Self {
        self.config.follow = body;
        self
    }

    pub fn set_offset(&mut self, offset: LayerOffset) -> &mut Self {
        self.config.offset = offset;
        self
    }

    pub fn set_manual(&mut self, manual: bool) -> &mut Self {
        self.config.manual = manual;
        self
    }

    pub fn set_scale(&mut self, scale: f32) -> Result<&mut Self, LayerError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(LayerError::InvalidScale { id: self.id.clone(), scale });
        }
        self.config.scale = scale;
        Ok(self)
    }

    #[inline]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Per-layer default styles. Bodies already drawn keep their sprites.
    #[inline]
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    // ── stack ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn stack(&self) -> &[BodyId] {
        &self.stack
    }

    /// Appends bodies to the explicit stack. Pass `[id]` for a single body.
    pub fn add_to_stack(&mut self, bodies: impl IntoIterator<Item = BodyId>) -> &mut Self {
        self.stack.extend(bodies);
        self
    }

    /// Removes the first occurrence of each body; absent bodies are ignored.
    pub fn remove_from_stack(&mut self, bodies: impl IntoIterator<Item = BodyId>) -> &mut Self {
        for body in bodies {
            if let Some(i) = self.stack.iter().position(|b| *b == body) {
                self.stack.remove(i);
            }
        }
        self
    }

    /// Replaces the stack. An empty iterator restores "draw everything".
    pub fn reset_stack(&mut self, bodies: impl IntoIterator<Item = BodyId>) -> &mut Self {
        self.stack.clear();
        self.stack.extend(bodies);
        self
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Camera offset for this frame, in unscaled world units.
    pub fn camera_offset(&self, world: &dyn World) -> Vec2 {
        let base = match self.config.offset {
            LayerOffset::Fixed(offset) => offset,
            LayerOffset::Center => {
                let (w, h) = self.surface.canvas.size();
                Vec2::new(w as f32 * 0.5, h as f32 * 0.5)
            }
        };
        let mut offset = base * (1.0 / self.config.scale);

        if let Some(target) = self.config.follow {
            match world.body(target) {
                Some(body) => offset -= body.position,
                None => log::trace!("layer {}: follow target {} not in world", self.id, target.0),
            }
        }

        offset
    }

    /// Draws one frame. Manual layers are left untouched.
    pub fn render(&mut self, world: &dyn World, views: &mut ViewCache, clear: bool) {
        if self.config.manual {
            return;
        }

        let offset = self.camera_offset(world);
        let scale = self.config.scale;
        let canvas = &mut self.surface.canvas;

        if clear {
            canvas.clear();
        }

        if scale != 1.0 {
            canvas.save();
            canvas.scale(scale);
        }

        let pass = BodyPass { styles: &self.styles, offset, debug: self.debug };
        if self.stack.is_empty() {
            for body in world.bodies() {
                pass.draw(canvas, views, body);
            }
        } else {
            for id in &self.stack {
                if let Some(body) = world.body(*id) {
                    pass.draw(canvas, views, body);
                }
            }
        }

        if scale != 1.0 {
            canvas.restore();
        }
    }

    /// Resizes the surface; the config records the size actually allocated.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.surface.canvas.resize(width, height);
        let (width, height) = self.surface.canvas.size();
        self.config.width = width;
        self.config.height = height;
    }
}

/// Per-frame drawing parameters shared by every body of a pass.
struct BodyPass<'a> {
    styles: &'a StyleTable,
    offset: Vec2,
    debug: bool,
}

impl BodyPass<'_> {
    fn draw(&self, canvas: &mut Canvas, views: &mut ViewCache, body: &Body) {
        if body.hidden {
            return;
        }

        let sprite = views.get_or_build(body, self.styles);
        self.place(canvas, &sprite, body);

        if self.debug {
            let aabb = body.aabb();
            let tint = Style::Solid(Color::from_straight(0.0, 0.0, 1.0, 0.3));
            draw::draw_rect(canvas, aabb.center() + self.offset, 2.0 * aabb.hw, 2.0 * aabb.hh, &tint);

            let silhouette = views.get_or_build_debug(body);
            self.place(canvas, &silhouette, body);
        }
    }

    fn place(&self, canvas: &mut Canvas, sprite: &Sprite, body: &Body) {
        let at = body.position + self.offset;
        canvas.save();
        canvas.translate(at.x, at.y);
        canvas.rotate(body.angle);
        canvas.draw_sprite(sprite);
        canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Geometry;
    use crate::layer::{LayerOptions, ZIndex};
    use crate::paint::{palette, StyleRecord};
    use crate::world::Bodies;

    fn layer(options: LayerOptions) -> Layer {
        let config = options.resolve("test", (200, 100), Vec2::zero()).unwrap();
        let surface = Surface { id: SurfaceId(0), canvas: Canvas::new(1, 1).unwrap() };
        Layer::new("test".into(), surface, config, StyleTable::default(), false, 0)
    }

    fn ball(id: u64, x: f32, y: f32) -> Body {
        Body::new(BodyId(id), Geometry::circle(6.0))
            .at(x, y)
            .with_style(StyleRecord::filled(palette::gold(), 1.0))
    }

    fn is_blank(canvas: &Canvas) -> bool {
        canvas.pixmap().data().iter().all(|&b| b == 0)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_sizes_surface_from_config() {
        let l = layer(LayerOptions::new().size(64, 48));
        assert_eq!(l.canvas().size(), (64, 48));
        assert_eq!(l.sort_key().z, ZIndex::new(1));
    }

    // ── stack ─────────────────────────────────────────────────────────────

    #[test]
    fn stack_add_remove_by_identity() {
        let mut l = layer(LayerOptions::new());
        l.add_to_stack([BodyId(1)]).add_to_stack([BodyId(2), BodyId(3)]);
        l.remove_from_stack([BodyId(2), BodyId(9)]);
        assert_eq!(l.stack(), &[BodyId(1), BodyId(3)]);

        l.reset_stack([]);
        assert!(l.stack().is_empty());
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn center_offset_is_divided_by_scale() {
        let l = layer(LayerOptions::new().centered().scale(2.0));
        assert_eq!(l.camera_offset(&Bodies::new()), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn fixed_offset_is_divided_by_scale() {
        let l = layer(LayerOptions::new().offset(40.0, 20.0).scale(4.0));
        assert_eq!(l.camera_offset(&Bodies::new()), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn follow_subtracts_target_position() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 70.0));
        let l = layer(LayerOptions::new().offset(100.0, 50.0).follow(BodyId(1)));
        assert_eq!(l.camera_offset(&world), Vec2::new(70.0, -20.0));
    }

    #[test]
    fn missing_follow_target_is_ignored() {
        let l = layer(LayerOptions::new().offset(3.0, 4.0).follow(BodyId(42)));
        assert_eq!(l.camera_offset(&Bodies::new()), Vec2::new(3.0, 4.0));
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn resize_records_allocated_size() {
        let mut l = layer(LayerOptions::new());
        l.resize(0, 40);
        assert_eq!(l.canvas().size(), (1, 40));
        assert_eq!((l.config().width, l.config().height), (1, 40));

        let fresh = layer(LayerOptions::new().size(0, 0));
        assert_eq!(fresh.canvas().size(), (1, 1));
        assert_eq!((fresh.config().width, fresh.config().height), (1, 1));
    }

    #[test]
    fn empty_stack_draws_whole_world() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 30.0));
        world.insert(ball(2, 150.0, 60.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());

        l.render(&world, &mut views, true);

        assert_eq!(l.canvas().alpha_at(30, 30), 255);
        assert_eq!(l.canvas().alpha_at(150, 60), 255);
    }

    #[test]
    fn explicit_stack_draws_only_listed_bodies() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 30.0));
        world.insert(ball(2, 150.0, 60.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());
        l.add_to_stack([BodyId(2), BodyId(77)]);

        l.render(&world, &mut views, true);

        assert_eq!(l.canvas().alpha_at(30, 30), 0);
        assert_eq!(l.canvas().alpha_at(150, 60), 255);
        assert!(views.get(BodyId(1), crate::view::ViewKind::Main).is_none());
    }

    #[test]
    fn hidden_bodies_are_skipped() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 30.0).hidden(true));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());

        l.render(&world, &mut views, true);

        assert!(is_blank(l.canvas()));
        assert_eq!(views.builds(), 0);
    }

    #[test]
    fn manual_layer_is_untouched() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 30.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new().manual(true));
        l.canvas_mut().fill(palette::pink());
        let before = l.canvas().pixmap().data().to_vec();

        l.render(&world, &mut views, true);
        l.render(&world, &mut views, false);

        assert_eq!(l.canvas().pixmap().data(), &before[..]);
        assert_eq!(views.builds(), 0);
    }

    #[test]
    fn render_without_clear_keeps_previous_pixels() {
        let mut world = Bodies::new();
        world.insert(ball(1, 30.0, 30.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());

        l.render(&world, &mut views, true);
        world.get_mut(BodyId(1)).unwrap().position = Vec2::new(120.0, 30.0);
        l.render(&world, &mut views, false);

        assert_eq!(l.canvas().alpha_at(30, 30), 255);
        assert_eq!(l.canvas().alpha_at(120, 30), 255);
    }

    #[test]
    fn scale_shrinks_drawing() {
        let mut world = Bodies::new();
        world.insert(ball(1, 100.0, 100.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new().scale(0.5));

        l.render(&world, &mut views, true);

        assert_eq!(l.canvas().alpha_at(50, 50), 255);
        assert_eq!(l.canvas().alpha_at(100, 100), 0);
        assert_eq!(l.canvas().saved_depth(), 0);
    }

    #[test]
    fn follow_camera_keeps_target_fixed_on_screen() {
        let mut world = Bodies::new();
        world.insert(ball(1, 20.0, 30.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new().centered().follow(BodyId(1)));

        l.render(&world, &mut views, true);
        let first = l.canvas().pixmap().data().to_vec();
        assert_eq!(l.canvas().alpha_at(100, 50), 255);

        world.get_mut(BodyId(1)).unwrap().position = Vec2::new(180.0, 5.0);
        l.render(&world, &mut views, true);

        assert_eq!(l.canvas().pixmap().data(), &first[..]);
    }

    #[test]
    fn sprite_is_rotated_by_body_angle() {
        let tick_only = StyleRecord { line_width: 1.0, ..StyleRecord::default() }
            .with_angle_indicator(palette::white());
        let mut world = Bodies::new();
        world.insert(
            Body::new(BodyId(1), Geometry::circle(10.0))
                .at(50.0, 50.0)
                .with_angle(core::f32::consts::FRAC_PI_2)
                .with_style(tick_only),
        );
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());

        l.render(&world, &mut views, true);

        let c = l.canvas();
        // The tick points along +x locally; a quarter turn sends it to +y.
        assert!(c.alpha_at(49, 56).max(c.alpha_at(50, 56)) > 0);
        assert_eq!(c.alpha_at(56, 49).max(c.alpha_at(56, 50)), 0);
    }

    #[test]
    fn debug_mode_builds_debug_sprites() {
        let mut world = Bodies::new();
        world.insert(ball(1, 50.0, 50.0));
        let mut views = ViewCache::new().unwrap();
        let mut l = layer(LayerOptions::new());
        l.set_debug(true);

        l.render(&world, &mut views, true);

        assert_eq!(views.len(), 2);
        assert!(views.get(BodyId(1), crate::view::ViewKind::Debug).is_some());
    }
}
