//! Drawing surfaces.
//!
//! `Canvas` is the software raster target every layer and sprite draws into.
//! `SurfaceProvider` abstracts where those canvases live in a host UI.

mod canvas;
mod provider;

pub use canvas::Canvas;
pub use provider::{HeadlessSurfaces, Surface, SurfaceId, SurfaceProvider};
