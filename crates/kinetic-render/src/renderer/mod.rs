//! Frame coordinator.
//!
//! Owns the surface provider, the layer registry and the sprite cache. A frame
//! is: notify the world, refresh the meta overlay, draw every layer in
//! registration order.

mod config;
mod meta;

pub use config::RendererConfig;
pub use meta::MetaOverlay;

use anyhow::{Context, Result};
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::layer::{Layer, LayerError, LayerOptions, LayerRegistry, ZIndex};
use crate::surface::{HeadlessSurfaces, Surface, SurfaceId, SurfaceProvider};
use crate::time::FrameMeta;
use crate::view::ViewCache;
use crate::world::{BeforeRender, BodyId, World};

/// Id of the layer bound to the primary surface.
pub const MAIN_LAYER: &str = "main";

pub struct Renderer {
    config: RendererConfig,
    surfaces: Box<dyn SurfaceProvider>,
    layers: LayerRegistry,
    views: ViewCache,
    meta: Option<MetaOverlay>,
    primary: SurfaceId,
    size: (u32, u32),
}

impl Renderer {
    /// Creates a renderer backed by in-memory surfaces.
    pub fn new(config: RendererConfig) -> Result<Self> {
        Self::with_provider(config, Box::new(HeadlessSurfaces::new()))
    }

    /// Creates the primary surface, attaches it and registers the `main` layer on it.
    pub fn with_provider(
        config: RendererConfig,
        mut surfaces: Box<dyn SurfaceProvider>,
    ) -> Result<Self> {
        let views = ViewCache::new()?;

        let primary = surfaces
            .create(config.width, config.height)
            .context("2D drawing backend unavailable: cannot create primary surface")?;
        let primary_id = primary.id;
        surfaces.attach(primary_id, None, ZIndex::default());

        let mut layers = LayerRegistry::new();
        layers.set_primary(primary_id);

        let size = (config.width, config.height);
        let meta = config.meta.then(MetaOverlay::new);

        let mut renderer = Self {
            config,
            surfaces,
            layers,
            views,
            meta,
            primary: primary_id,
            size,
        };

        renderer
            .add_layer(MAIN_LAYER, Some(primary), LayerOptions::new())
            .context("failed registering main layer")?;
        renderer.resize(size.0, size.1);

        log::info!("renderer ready: {}x{}", size.0, size.1);
        Ok(renderer)
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Allocates a surface through the provider without registering it.
    pub fn create_surface(&mut self, width: u32, height: u32) -> Result<Surface> {
        self.surfaces
            .create(width, height)
            .with_context(|| format!("failed creating {width}x{height} surface"))
    }

    /// Registers a layer. Without `surface`, one is created through the provider.
    ///
    /// Non-primary surfaces are attached before the primary surface.
    pub fn add_layer(
        &mut self,
        id: impl Into<String>,
        surface: Option<Surface>,
        options: LayerOptions,
    ) -> Result<&mut Layer, LayerError> {
        let id = id.into();
        if self.layers.contains(&id) {
            return Err(LayerError::Duplicate(id));
        }

        let config = options.resolve(&id, self.size, self.config.offset)?;

        let surface = match surface {
            Some(surface) => surface,
            None => self.surfaces.create(config.width, config.height).map_err(|err| {
                LayerError::Surface { id: id.clone(), reason: format!("{err:#}") }
            })?,
        };

        if surface.id != self.primary {
            self.surfaces.attach(surface.id, Some(self.primary), config.z_index);
        }

        self.layers
            .insert(id, surface, config, self.config.styles.clone(), self.config.debug)
    }

    /// Removes a layer by id; its surface is detached unless it is the primary one.
    ///
    /// Removal is by id only. Use [`Layer::id`] to remove a layer you hold.
    pub fn remove_layer(&mut self, id: &str) -> Option<Layer> {
        self.layers.remove(id, self.surfaces.as_mut())
    }

    #[inline]
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    #[inline]
    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.get_mut(id)
    }

    #[inline]
    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    /// Resizes the primary size and every `auto_resize` layer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.layers.resize(width, height);
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Toggles debug drawing on the renderer and every registered layer.
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
        for layer in self.layers.iter_mut() {
            layer.set_debug(debug);
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Draws one frame of `world` on every layer.
    pub fn render(&mut self, world: &mut dyn World, meta: &FrameMeta) {
        world.before_render(BeforeRender { renderer: &mut *self, meta });

        if let Some(overlay) = self.meta.as_mut() {
            overlay.update(meta);
        }

        let world: &dyn World = world;
        for layer in self.layers.iter_mut() {
            layer.render(world, &mut self.views, true);
        }
    }

    /// Draws a single layer, typically a manual one the caller just unlocked.
    ///
    /// Returns `false` when no such layer exists.
    pub fn render_layer(&mut self, id: &str, world: &dyn World, clear: bool) -> bool {
        match self.layers.get_mut(id) {
            Some(layer) => {
                layer.render(world, &mut self.views, clear);
                true
            }
            None => false,
        }
    }

    /// Drops cached sprites of a body that left the world.
    pub fn forget_body(&mut self, body: BodyId) -> bool {
        self.views.forget(body)
    }

    /// Flattens every layer, back to front, into an image of the primary size.
    pub fn composite(&self) -> Result<Pixmap> {
        let (width, height) = self.size;
        let mut out = Pixmap::new(width.max(1), height.max(1))
            .with_context(|| format!("failed allocating {width}x{height} composite"))?;

        let paint = PixmapPaint::default();
        for layer in self.layers.sorted() {
            out.draw_pixmap(0, 0, layer.canvas().pixmap().as_ref(), &paint, Transform::identity(), None);
        }

        Ok(out)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn views(&self) -> &ViewCache {
        &self.views
    }

    #[inline]
    pub fn meta(&self) -> Option<&MetaOverlay> {
        self.meta.as_ref()
    }

    #[inline]
    pub fn surfaces(&self) -> &dyn SurfaceProvider {
        self.surfaces.as_ref()
    }

    #[inline]
    pub fn primary_surface(&self) -> SurfaceId {
        self.primary
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("size", &self.size)
            .field("layers", &self.layers.ids().collect::<Vec<_>>())
            .field("views", &self.views.len())
            .field("meta", &self.meta)
            .finish()
    }
}
