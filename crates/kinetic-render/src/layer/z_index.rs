use core::cmp::Ordering;

/// Stacking index of a layer surface.
///
/// Higher values are composited on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Default for ZIndex {
    /// Layers stack at 1 unless told otherwise.
    #[inline]
    fn default() -> Self {
        Self(1)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
