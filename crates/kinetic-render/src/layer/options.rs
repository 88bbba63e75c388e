use crate::coords::Vec2;
use crate::world::BodyId;

use super::{LayerError, ZIndex};

/// Camera offset of a layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LayerOffset {
    /// Fixed offset in surface pixels.
    Fixed(Vec2),
    /// Half the surface size; world origin lands in the middle.
    Center,
}

/// Options recognised by [`LayerRegistry::add`](super::LayerRegistry::add).
///
/// Unset fields take the documented defaults when the layer is added.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOptions {
    /// Surface width. Default: the primary surface's width.
    pub width: Option<u32>,
    /// Surface height. Default: the primary surface's height.
    pub height: Option<u32>,
    /// Skip automatic drawing; the caller owns the surface. Default: false.
    pub manual: bool,
    /// Follow renderer resizes. Default: true.
    pub auto_resize: bool,
    /// Keep this body at a fixed screen position. Default: none.
    pub follow: Option<BodyId>,
    /// Uniform scale. Default: 1.
    pub scale: f32,
    /// Default: 1.
    pub z_index: ZIndex,
    /// Default: the renderer's offset.
    pub offset: Option<LayerOffset>,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            manual: false,
            auto_resize: true,
            follow: None,
            scale: 1.0,
            z_index: ZIndex::default(),
            offset: None,
        }
    }
}

impl LayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    pub fn auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    pub fn follow(mut self, body: BodyId) -> Self {
        self.follow = Some(body);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = ZIndex::new(z);
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Some(LayerOffset::Fixed(Vec2::new(x, y)));
        self
    }

    pub fn centered(mut self) -> Self {
        self.offset = Some(LayerOffset::Center);
        self
    }

    /// Fills in defaults and validates.
    pub(crate) fn resolve(
        self,
        id: &str,
        default_size: (u32, u32),
        default_offset: Vec2,
    ) -> Result<LayerConfig, LayerError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(LayerError::InvalidScale { id: id.to_owned(), scale: self.scale });
        }

        Ok(LayerConfig {
            width: self.width.unwrap_or(default_size.0),
            height: self.height.unwrap_or(default_size.1),
            manual: self.manual,
            auto_resize: self.auto_resize,
            follow: self.follow,
            scale: self.scale,
            z_index: self.z_index,
            offset: self.offset.unwrap_or(LayerOffset::Fixed(default_offset)),
        })
    }
}

/// Validated layer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerConfig {
    pub width: u32,
    pub height: u32,
    pub manual: bool,
    pub auto_resize: bool,
    pub follow: Option<BodyId>,
    pub scale: f32,
    pub z_index: ZIndex,
    pub offset: LayerOffset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_unset_fields() {
        let cfg = LayerOptions::new().resolve("a", (400, 300), Vec2::new(5.0, 6.0)).unwrap();
        assert_eq!((cfg.width, cfg.height), (400, 300));
        assert!(!cfg.manual);
        assert!(cfg.auto_resize);
        assert_eq!(cfg.follow, None);
        assert_eq!(cfg.scale, 1.0);
        assert_eq!(cfg.z_index, ZIndex::new(1));
        assert_eq!(cfg.offset, LayerOffset::Fixed(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn explicit_fields_win() {
        let cfg = LayerOptions::new()
            .size(64, 32)
            .manual(true)
            .auto_resize(false)
            .follow(BodyId(3))
            .scale(0.5)
            .z_index(4)
            .centered()
            .resolve("a", (400, 300), Vec2::zero())
            .unwrap();
        assert_eq!((cfg.width, cfg.height), (64, 32));
        assert!(cfg.manual && !cfg.auto_resize);
        assert_eq!(cfg.follow, Some(BodyId(3)));
        assert_eq!(cfg.offset, LayerOffset::Center);
    }

    #[test]
    fn bad_scale_is_rejected() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = LayerOptions::new().scale(scale).resolve("m", (1, 1), Vec2::zero());
            assert!(matches!(err, Err(LayerError::InvalidScale { .. })));
        }
    }
}
