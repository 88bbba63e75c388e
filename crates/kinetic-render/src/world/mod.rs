//! Boundary with the physics simulation.
//!
//! The renderer reads bodies through [`World`] and never mutates them. Before
//! each frame it hands the world a [`BeforeRender`] event so listeners can
//! adjust renderer state (layers, stacks, camera targets) ahead of drawing.

mod body;

pub use body::{Body, BodyId};

use crate::renderer::Renderer;
use crate::time::FrameMeta;

/// Payload of the `beforeRender` notification.
pub struct BeforeRender<'a> {
    pub renderer: &'a mut Renderer,
    pub meta: &'a FrameMeta,
}

/// Simulation collaborator consumed by the renderer.
pub trait World {
    /// Every body in the simulation, in draw order.
    fn bodies(&self) -> &[Body];

    fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies().iter().find(|b| b.id == id)
    }

    /// Called once per frame before any layer draws.
    fn before_render(&mut self, event: BeforeRender<'_>) {
        let _ = event;
    }
}

type Listener = Box<dyn FnMut(&mut BeforeRender<'_>)>;

/// Vector-backed [`World`] with `beforeRender` listeners.
#[derive(Default)]
pub struct Bodies {
    bodies: Vec<Body>,
    listeners: Vec<Listener>,
}

impl Bodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `body`, replacing any body with the same id in place.
    pub fn insert(&mut self, body: Body) {
        match self.bodies.iter_mut().find(|b| b.id == body.id) {
            Some(slot) => *slot = body,
            None => self.bodies.push(body),
        }
    }

    /// Removes a body. The caller should also forget its sprites.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.remove(index))
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Registers a listener for the `beforeRender` notification.
    pub fn on_before_render(&mut self, listener: impl FnMut(&mut BeforeRender<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl World for Bodies {
    #[inline]
    fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    fn before_render(&mut self, mut event: BeforeRender<'_>) {
        for listener in &mut self.listeners {
            listener(&mut event);
        }
    }
}
