//! Layers: named surfaces with a camera, a body stack and a stacking order.

mod error;
mod key;
#[allow(clippy::module_inception)]
mod layer;
mod options;
mod registry;
mod z_index;

pub use error::LayerError;
pub use key::SortKey;
pub use layer::Layer;
pub use options::{LayerConfig, LayerOffset, LayerOptions};
pub use registry::LayerRegistry;
pub use z_index::ZIndex;
