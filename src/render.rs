//! Drawing palettes as vertical strips and exporting them as JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use log::trace;
use rgb::RGB8;
use crate::Error;

/// JPEG quality used for exports.
pub const JPEG_QUALITY: u8 = 100;

/// Draw `colors` as vertical strips, left to right, each
/// `strip_width` pixels wide and `height` pixels high.
///
/// Returns `None` when there is nothing to draw: no colors, a zero
/// dimension, or a total width not fitting in `u32`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_strips::render::render;
/// let img = render(&[RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)], 50, 300)
///     .unwrap();
/// assert_eq!(img.dimensions(), (100, 300));
/// assert!(render(&[], 50, 300).is_none());
/// ```
pub fn render(colors: &[RGB8], strip_width: u32, height: u32) -> Option<RgbImage> {
    if colors.is_empty() || strip_width == 0 || height == 0 {
        return None;
    }
    let n = u32::try_from(colors.len()).ok()?;
    let width = strip_width.checked_mul(n)?;
    trace!("rendering {n} strips into {width}×{height}");
    Some(RgbImage::from_fn(width, height, |x, _| {
        let c = colors[(x / strip_width) as usize];
        Rgb([c.r, c.g, c.b])
    }))
}

/// Encode the image as a baseline JPEG at [`JPEG_QUALITY`].
pub fn encode_jpeg(img: &RgbImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(img)?;
    Ok(bytes)
}

/// A rendered palette ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Name of the downloaded file for a palette built from `base`.
///
/// ```
/// assert_eq!(color_strips::render::file_name("#3498db"), "palette-#3498db.jpeg");
/// ```
pub fn file_name(base: &str) -> String {
    format!("palette-{}.jpeg", base.trim())
}

/// Render and encode `colors`; `Ok(None)` if there is nothing to
/// draw.
pub fn export(base: &str, colors: &[RGB8], strip_width: u32, height: u32)
              -> Result<Option<Export>, Error> {
    match render(colors, strip_width, height) {
        Some(img) => Ok(Some(Export { file_name: file_name(base),
                                      bytes: encode_jpeg(&img)? })),
        None => Ok(None),
    }
}
