use crate::time::FrameMeta;

/// Frame statistics readout, refreshed once per rendered frame.
///
/// The host decides where to show [`text`](Self::text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaOverlay {
    fps: String,
    ipf: u32,
}

impl MetaOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, meta: &FrameMeta) {
        self.fps = format!("{:.2}", meta.fps);
        self.ipf = meta.ipf;
    }

    /// Fps with two decimals.
    #[inline]
    pub fn fps(&self) -> &str {
        &self.fps
    }

    #[inline]
    pub fn ipf(&self) -> u32 {
        self.ipf
    }

    pub fn text(&self) -> String {
        format!("fps: {}\nipf: {}", self.fps, self.ipf)
    }
}
