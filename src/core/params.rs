use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::OutputEncoding;

/// Map-view widths including the 600px slot for 2x pixel density on mobile
/// (300px display * 2 = 600px).
pub const MAPVIEW_WIDTHS_2X: [u32; 4] = [300, 480, 600, 800];

/// Map-view widths without the 2x slot.
pub const MAPVIEW_WIDTHS: [u32; 3] = [300, 480, 800];

/// Standard web quality for photographic WebP derivatives.
pub const WEBP_QUALITY_PHOTO: u8 = 75;

/// Logos need slightly higher quality than photos.
pub const WEBP_QUALITY_LOGO: u8 = 80;

/// Higher-quality WebP setting used by one of the asset set variants.
pub const WEBP_QUALITY_HIGH: u8 = 85;

/// Logos wider than this are resized down and overwritten in place.
pub const LOGO_MAX_WIDTH: u32 = 512;

/// Small header-logo width; sharp on Retina screens at ~40px display size.
pub const LOGO_SMALL_WIDTH: u32 = 64;

/// Derivative generation parameters for one source image, suitable for
/// config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceImageSpec {
    pub path: PathBuf,
    /// Target widths in pixels, processed in the given order; heights
    /// follow the source aspect ratio
    pub target_widths: Vec<u32>,
    /// Encodings written for every width
    pub outputs: Vec<OutputEncoding>,
}

impl SourceImageSpec {
    /// Responsive preset: optimized PNG plus lossy WebP at `quality`,
    /// one pair per width.
    pub fn responsive(path: impl Into<PathBuf>, target_widths: &[u32], quality: u8) -> Self {
        Self {
            path: path.into(),
            target_widths: target_widths.to_vec(),
            outputs: vec![
                OutputEncoding::PngOptimized,
                OutputEncoding::WebpLossy { quality },
            ],
        }
    }
}

/// Logo optimization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoSpec {
    pub path: PathBuf,
    /// Sources wider than this are resized down to it and overwritten in
    /// place; narrower sources are re-encoded unchanged
    pub max_width: u32,
    /// Optional extra small derivative width (header logo); None disables it
    pub small_width: Option<u32>,
    /// Encodings written for the small derivative
    pub small_outputs: Vec<OutputEncoding>,
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/logo.png"),
            max_width: LOGO_MAX_WIDTH,
            small_width: Some(LOGO_SMALL_WIDTH),
            small_outputs: vec![
                OutputEncoding::PngOptimized,
                OutputEncoding::WebpLossy {
                    quality: WEBP_QUALITY_LOGO,
                },
            ],
        }
    }
}

/// One batch job: tagged configuration instead of per-variant scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImageJob {
    Responsive(SourceImageSpec),
    Logo(LogoSpec),
}

impl ImageJob {
    pub fn path(&self) -> &Path {
        match self {
            ImageJob::Responsive(spec) => &spec.path,
            ImageJob::Logo(spec) => &spec.path,
        }
    }
}
