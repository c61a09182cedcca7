use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::io::writers::png::write_png_optimized;
use crate::io::writers::webp::{write_webp_lossless, write_webp_lossy};
use crate::types::{OutputEncoding, OutputFormat};

/// Sibling output path for a derivative: `<base_name>_<width>.<ext>`,
/// where `base_name` is the source path without its extension.
pub fn derivative_path(source: &Path, width: u32, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}_{}.{}", stem, width, format.extension()))
}

/// Encode `image` with `encoding` and write it to `output`, unconditionally
/// overwriting any existing file at that path.
pub fn save_derivative(
    image: &RgbaImage,
    output: &Path,
    encoding: OutputEncoding,
) -> Result<(), Box<dyn std::error::Error>> {
    match encoding {
        OutputEncoding::PngOptimized => write_png_optimized(output, image)?,
        OutputEncoding::WebpLossy { quality } => write_webp_lossy(output, image, quality)?,
        OutputEncoding::WebpLossless => write_webp_lossless(output, image)?,
    }
    info!("Saved {:?}", output);
    Ok(())
}
