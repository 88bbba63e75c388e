use indexmap::IndexMap;

use crate::paint::StyleTable;
use crate::surface::{Surface, SurfaceId, SurfaceProvider};

use super::{Layer, LayerConfig, LayerError};

/// Named layers in insertion order.
///
/// Iteration order is draw order; compositing order is [`Layer::sort_key`].
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: IndexMap<String, Layer>,
    primary: Option<SurfaceId>,
    next_order: u32,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the surface that is never detached on removal.
    pub(crate) fn set_primary(&mut self, surface: SurfaceId) {
        self.primary = Some(surface);
    }

    #[inline]
    pub fn primary(&self) -> Option<SurfaceId> {
        self.primary
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    /// Registers a layer bound to `surface`.
    pub(crate) fn insert(
        &mut self,
        id: String,
        surface: Surface,
        config: LayerConfig,
        styles: StyleTable,
        debug: bool,
    ) -> Result<&mut Layer, LayerError> {
        if self.layers.contains_key(&id) {
            return Err(LayerError::Duplicate(id));
        }

        let order = self.next_order;
        self.next_order += 1;

        log::debug!(
            "layer {id}: added {}x{} scale={} z={}",
            config.width,
            config.height,
            config.scale,
            config.z_index.0
        );

        let layer = Layer::new(id.clone(), surface, config, styles, debug, order);
        let entry = self.layers.entry(id).or_insert(layer);
        Ok(entry)
    }

    /// Removes a layer and detaches its surface unless it is the primary one.
    pub fn remove(&mut self, id: &str, provider: &mut dyn SurfaceProvider) -> Option<Layer> {
        let Some(layer) = self.layers.shift_remove(id) else {
            log::warn!("layer {id}: remove ignored, not registered");
            return None;
        };

        if Some(layer.surface_id()) != self.primary {
            provider.detach(layer.surface_id());
        }

        log::debug!("layer {id}: removed");
        Some(layer)
    }

    /// Resizes every `auto_resize` layer.
    pub fn resize(&mut self, width: u32, height: u32) {
        for layer in self.layers.values_mut().filter(|l| l.config().auto_resize) {
            layer.resize(width, height);
        }
        log::debug!("layers resized to {width}x{height}");
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Layers back-to-front by (z-index, insertion).
    pub fn sorted(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.values().collect();
        layers.sort_by_key(|l| l.sort_key());
        layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
