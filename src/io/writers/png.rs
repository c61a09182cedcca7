use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write an RGBA bitmap as PNG with maximum-effort lossless compression.
pub fn write_png_optimized(
    output: &Path,
    image: &RgbaImage,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}
