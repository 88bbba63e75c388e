/// Premultiplied RGBA color, components in the surfaces' sRGB space.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha), matching the
///   pixel format of the software surfaces.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    #[inline]
    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub fn from_rgb_hex(hex: u32) -> Self {
        Self::from_srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Converts to the rasterizer's color type (straight alpha, clamped).
    pub fn to_skia(self) -> tiny_skia::Color {
        let (r, g, b, a) = self.to_straight();
        tiny_skia::Color::from_rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a)
            .unwrap_or(tiny_skia::Color::TRANSPARENT)
    }
}

/// Named colors used by the default styles.
pub mod palette {
    use super::Color;

    pub fn white() -> Color {
        Color::from_rgb_hex(0xFFFFFF)
    }

    pub fn violet() -> Color {
        Color::from_rgb_hex(0x542437)
    }

    pub fn blue() -> Color {
        Color::from_rgb_hex(0x53777A)
    }

    pub fn gold() -> Color {
        Color::from_rgb_hex(0xECD078)
    }

    pub fn orange() -> Color {
        Color::from_rgb_hex(0xD95B43)
    }

    pub fn pink() -> Color {
        Color::from_rgb_hex(0xC02942)
    }
}
