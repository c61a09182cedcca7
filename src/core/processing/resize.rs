use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::warn;

/// Derivative height for a target width, preserving the source aspect
/// ratio. Height is always derived from width, never chosen independently.
pub fn derivative_height(original_cols: u32, original_rows: u32, target_cols: u32) -> u32 {
    (target_cols as f64 * original_rows as f64 / original_cols as f64).round() as u32
}

/// Resize an RGBA bitmap to exactly `target_cols` x `target_rows` with a
/// Lanczos3 convolution.
pub fn resize_rgba_image(
    src: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    // Already at the requested size, skip resizing
    if target_cols == src.width() && target_rows == src.height() {
        return Ok(src.clone());
    }

    if target_cols > src.width() {
        warn!(
            "Target width {} is larger than original width {}. Upscaling {}x{}",
            target_cols,
            src.width(),
            src.width(),
            src.height()
        );
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or("resized buffer does not match target dimensions".into())
}
