use std::fs;
use std::path::Path;

use image::RgbaImage;
use webp::Encoder;

/// Write an RGBA bitmap as lossy WebP at the given 0-100 quality.
pub fn write_webp_lossy(
    output: &Path,
    image: &RgbaImage,
    quality: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let encoded = encoder.encode(quality as f32);
    fs::write(output, &*encoded)?;
    Ok(())
}

/// Write an RGBA bitmap as lossless WebP.
pub fn write_webp_lossless(
    output: &Path,
    image: &RgbaImage,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let encoded = encoder.encode_lossless();
    fs::write(output, &*encoded)?;
    Ok(())
}
