//! Sprite construction and the per-body sprite cache.

mod cache;
mod decode;
mod sprite;

pub use cache::{create_view, ViewCache, ViewKey, ViewKind};
pub use sprite::Sprite;
