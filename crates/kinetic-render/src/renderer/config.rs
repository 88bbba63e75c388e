use crate::coords::Vec2;
use crate::paint::StyleTable;

/// Construction parameters for [`Renderer`](super::Renderer).
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Primary surface width in pixels.
    pub width: u32,
    /// Primary surface height in pixels.
    pub height: u32,

    /// Draw AABBs and debug silhouettes on every layer.
    pub debug: bool,

    /// Maintain the fps / ipf overlay text.
    pub meta: bool,

    /// Default per-kind styles, copied into each new layer.
    pub styles: StyleTable,

    /// Camera offset inherited by layers that do not set one.
    pub offset: Vec2,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            debug: false,
            meta: false,
            styles: StyleTable::default(),
            offset: Vec2::zero(),
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    /// Merges `styles` over the defaults; kinds not mentioned keep theirs.
    pub fn styles(mut self, styles: &StyleTable) -> Self {
        self.styles.merge(styles);
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }
}
