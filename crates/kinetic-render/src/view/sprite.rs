use tiny_skia::Pixmap;

/// Pre-rasterized image of one body, drawn centered on the body's position.
///
/// `width`/`height` are display dimensions; they differ from the image's when a
/// style asks for an explicit size. Sprites are immutable once built.
pub struct Sprite {
    image: Option<Pixmap>,
    width: f32,
    height: f32,
}

impl Sprite {
    /// Sprite displayed at the image's natural size.
    pub fn from_pixmap(image: Pixmap) -> Self {
        let (width, height) = (image.width() as f32, image.height() as f32);
        Self { image: Some(image), width, height }
    }

    /// Sprite with a footprint but nothing to draw.
    pub fn blank(width: f32, height: f32) -> Self {
        Self { image: None, width, height }
    }

    /// Overrides the display size.
    pub fn with_display_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        self
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn image(&self) -> Option<&Pixmap> {
        self.image.as_ref()
    }
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_image", &self.image.is_some())
            .finish()
    }
}
