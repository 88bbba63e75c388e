use anyhow::Result;

use crate::layer::ZIndex;

use super::Canvas;

/// Host-side identity of a drawing surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(pub u64);

/// A canvas together with the id the host knows it by.
#[derive(Debug)]
pub struct Surface {
    pub id: SurfaceId,
    pub canvas: Canvas,
}

/// Creates drawing surfaces and places them in the host's display tree.
///
/// The renderer never touches the host UI directly; attachment order and
/// z-index are advisory to whatever composes the surfaces on screen.
pub trait SurfaceProvider {
    /// Allocates a new surface. Failure here is fatal for renderer setup.
    fn create(&mut self, width: u32, height: u32) -> Result<Surface>;

    /// Places `surface` in the host tree, before `sibling` when given, otherwise last.
    fn attach(&mut self, surface: SurfaceId, sibling: Option<SurfaceId>, z_index: ZIndex);

    /// Removes `surface` from the host tree. Unknown ids are ignored.
    fn detach(&mut self, surface: SurfaceId);

    fn is_attached(&self, surface: SurfaceId) -> bool;
}

/// In-memory provider: surfaces are plain canvases, attachment is a list.
#[derive(Debug, Default)]
pub struct HeadlessSurfaces {
    next_id: u64,
    attached: Vec<(SurfaceId, ZIndex)>,
}

impl HeadlessSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached surfaces in host order.
    pub fn attached(&self) -> impl Iterator<Item = (SurfaceId, ZIndex)> + '_ {
        self.attached.iter().copied()
    }
}

impl SurfaceProvider for HeadlessSurfaces {
    fn create(&mut self, width: u32, height: u32) -> Result<Surface> {
        let canvas = Canvas::new(width, height)?;
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        Ok(Surface { id, canvas })
    }

    fn attach(&mut self, surface: SurfaceId, sibling: Option<SurfaceId>, z_index: ZIndex) {
        self.attached.retain(|(id, _)| *id != surface);

        let index = sibling
            .and_then(|s| self.attached.iter().position(|(id, _)| *id == s))
            .unwrap_or(self.attached.len());
        self.attached.insert(index, (surface, z_index));
    }

    fn detach(&mut self, surface: SurfaceId) {
        self.attached.retain(|(id, _)| *id != surface);
    }

    fn is_attached(&self, surface: SurfaceId) -> bool {
        self.attached.iter().any(|(id, _)| *id == surface)
    }
}
