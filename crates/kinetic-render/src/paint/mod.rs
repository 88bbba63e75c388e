//! Paint model: colors and body styles.
//!
//! Geometry types remain in `coords`.

mod color;
mod style;

pub use color::{palette, Color};
pub use style::{Style, StyleRecord, StyleTable};
