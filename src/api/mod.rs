//! High-level, ergonomic library API: generate width-scaled derivatives
//! for a source image, optimize a logo in place, and run batches of tagged
//! jobs. Prefer using these entrypoints over low-level processing modules
//! when integrating RESPIMG.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::{ImageJob, LogoSpec, SourceImageSpec};
use crate::core::processing::resize::{derivative_height, resize_rgba_image};
use crate::core::processing::save::{derivative_path, save_derivative};
use crate::error::{Error, Result};
use crate::io::reader::SourceImage;
use crate::types::{OutputEncoding, OutputFormat};

/// One produced derivative file
#[derive(Debug, Clone)]
pub struct Derivative {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub output_path: PathBuf,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

fn validate_widths(path: &Path, widths: &[u32]) -> Result<()> {
    if widths.is_empty() {
        return Err(Error::EmptyWidths {
            path: path.display().to_string(),
        });
    }
    for &width in widths {
        if width == 0 {
            return Err(Error::ZeroWidth { width });
        }
    }
    Ok(())
}

fn validate_outputs(outputs: &[OutputEncoding]) -> Result<()> {
    for encoding in outputs {
        if let OutputEncoding::WebpLossy { quality } = encoding {
            if *quality > 100 {
                return Err(Error::InvalidArgument {
                    arg: "quality",
                    value: quality.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Generate every configured derivative for one source image.
///
/// The source is decoded once; each target width is resized from the same
/// bitmap with the height derived from the original aspect ratio, then
/// written in every configured encoding as `<base_name>_<width>.<ext>`
/// next to the source.
///
/// Returns `Ok(None)` when the source file does not exist (skip condition,
/// no work done). Decode and write failures are returned as errors; the
/// batch loop in [`run_batch`] contains them per source.
pub fn generate_derivatives(spec: &SourceImageSpec) -> Result<Option<Vec<Derivative>>> {
    validate_widths(&spec.path, &spec.target_widths)?;
    validate_outputs(&spec.outputs)?;

    let source = match SourceImage::open_if_exists(&spec.path)? {
        Some(source) => source,
        None => return Ok(None),
    };

    let mut derivatives = Vec::with_capacity(spec.target_widths.len() * spec.outputs.len());
    for &width in &spec.target_widths {
        let height = derivative_height(source.width(), source.height(), width);
        let resized =
            resize_rgba_image(source.pixels(), width, height).map_err(Error::external)?;

        for &encoding in &spec.outputs {
            let output = derivative_path(&spec.path, width, encoding.format());
            save_derivative(&resized, &output, encoding).map_err(Error::external)?;
            derivatives.push(Derivative {
                width,
                height,
                format: encoding.format(),
                output_path: output,
            });
        }
    }

    Ok(Some(derivatives))
}

/// Optimize a logo in place and optionally emit a small header derivative.
///
/// Sources wider than `spec.max_width` are resized down to it (aspect
/// ratio preserved) and overwritten at their original path as optimized
/// PNG; narrower sources are re-encoded in place unchanged. The small
/// derivative is always cut from the original decoded bitmap, not the
/// capped one.
///
/// Returns `Ok(None)` when the source file does not exist.
pub fn optimize_logo(spec: &LogoSpec) -> Result<Option<Vec<Derivative>>> {
    if spec.max_width == 0 {
        return Err(Error::ZeroWidth { width: 0 });
    }
    if spec.small_width == Some(0) {
        return Err(Error::ZeroWidth { width: 0 });
    }
    validate_outputs(&spec.small_outputs)?;

    let source = match SourceImage::open_if_exists(&spec.path)? {
        Some(source) => source,
        None => return Ok(None),
    };

    let mut derivatives = Vec::new();

    if source.width() > spec.max_width {
        info!("Logo is large, resizing to {}px width...", spec.max_width);
        let height = derivative_height(source.width(), source.height(), spec.max_width);
        let capped = resize_rgba_image(source.pixels(), spec.max_width, height)
            .map_err(Error::external)?;
        save_derivative(&capped, &spec.path, OutputEncoding::PngOptimized)
            .map_err(Error::external)?;
        derivatives.push(Derivative {
            width: spec.max_width,
            height,
            format: OutputFormat::PNG,
            output_path: spec.path.clone(),
        });
    } else {
        info!("Logo is already small enough. Optimizing only...");
        save_derivative(source.pixels(), &spec.path, OutputEncoding::PngOptimized)
            .map_err(Error::external)?;
        derivatives.push(Derivative {
            width: source.width(),
            height: source.height(),
            format: OutputFormat::PNG,
            output_path: spec.path.clone(),
        });
    }

    if let Some(small_width) = spec.small_width {
        let small_height = derivative_height(source.width(), source.height(), small_width);
        let small = resize_rgba_image(source.pixels(), small_width, small_height)
            .map_err(Error::external)?;
        for &encoding in &spec.small_outputs {
            let output = derivative_path(&spec.path, small_width, encoding.format());
            save_derivative(&small, &output, encoding).map_err(Error::external)?;
            derivatives.push(Derivative {
                width: small_width,
                height: small_height,
                format: encoding.format(),
                output_path: output,
            });
        }
    }

    Ok(Some(derivatives))
}

/// Run every job in order. If `continue_on_error` is true, per-source
/// failures are logged, counted in the report, and processing continues;
/// otherwise the first error is returned. Already-written files of a
/// failed source are left in place.
pub fn run_batch(jobs: &[ImageJob], continue_on_error: bool) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for job in jobs {
        let outcome = match job {
            ImageJob::Responsive(spec) => generate_derivatives(spec),
            ImageJob::Logo(spec) => optimize_logo(spec),
        };

        match outcome {
            Ok(Some(derivatives)) => {
                info!(
                    "Successfully processed: {:?} ({} files)\n",
                    job.path(),
                    derivatives.len()
                );
                report.processed += 1;
            }
            Ok(None) => {
                report.skipped += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", job.path(), e);
            }
        }
    }

    Ok(report)
}
