use std::path::Path;

use anyhow::{Context, Result};
use image::ImageReader;
use tiny_skia::{IntSize, Pixmap};

/// Decodes an image file into a premultiplied pixmap.
pub(super) fn load_pixmap(path: &Path) -> Result<Pixmap> {
    let image = ImageReader::open(path)
        .with_context(|| format!("failed opening {}", path.display()))?
        .decode()
        .with_context(|| format!("failed decoding {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();

    let mut rgba = image.into_raw();
    premultiply_rgba_in_place(&mut rgba);

    let size = IntSize::from_wh(width, height)
        .with_context(|| format!("{} has no pixels", path.display()))?;
    Pixmap::from_vec(rgba, size)
        .with_context(|| format!("failed to wrap {} as a pixmap", path.display()))
}

fn premultiply_rgba_in_place(rgba: &mut [u8]) {
    for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(rgba) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}
