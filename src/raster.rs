//! Pure raster steps: color normalization, resampling and PNG encoding.
//! Nothing here touches the filesystem.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, Rgba32FImage, RgbaImage};

use crate::error::IconError;

/// Convert to 8-bit RGBA. The flag is `true` when the source was in any other
/// color mode.
pub fn normalize(img: DynamicImage) -> (RgbaImage, bool) {
    match img {
        DynamicImage::ImageRgba8(rgba) => (rgba, false),
        other => (other.into_rgba8(), true),
    }
}

/// Resample to exactly `size`x`size` with Lanczos3.
///
/// Color is premultiplied by alpha while filtering, so fully transparent
/// pixels do not bleed their color into visible edges. Aspect ratio is not
/// preserved: a non-square source is stretched.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = image::imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);

    RgbaImage::from_fn(size, size, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encode as an RGBA PNG with maximum compression.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|source| IconError::Encode {
            size: img.width(),
            source,
        })?;
    Ok(buf)
}
