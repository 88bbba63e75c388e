//! Kinetic render crate.
//!
//! Layered, sprite-cached rendering of 2D physics bodies onto software
//! drawing surfaces. The simulation and the host UI stay outside: bodies come in
//! through [`world::World`], surfaces are created and attached through
//! [`surface::SurfaceProvider`].

pub mod logging;
pub mod coords;
pub mod paint;
pub mod time;

pub mod world;
pub mod surface;
pub mod draw;
pub mod view;
pub mod layer;
pub mod renderer;

pub use renderer::{MetaOverlay, Renderer, RendererConfig};
