//! Shared types and enums used across RESPIMG.
//! Includes `OutputFormat` (the on-disk container) and `OutputEncoding`
//! (the concrete encoder configuration a derivative is written with).
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    WEBP,
}

impl OutputFormat {
    /// File extension used by the `<base>_<width>.<ext>` naming convention.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "png",
            OutputFormat::WEBP => "webp",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::WEBP => write!(f, "WEBP"),
        }
    }
}

/// One encoding a derivative is written in. Quality is a lossy-compression
/// parameter on the 0-100 scale; the PNG path trades encode time for size
/// instead (maximum-effort lossless compression).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputEncoding {
    PngOptimized,
    WebpLossy { quality: u8 },
    WebpLossless,
}

impl OutputEncoding {
    pub fn format(&self) -> OutputFormat {
        match self {
            OutputEncoding::PngOptimized => OutputFormat::PNG,
            OutputEncoding::WebpLossy { .. } | OutputEncoding::WebpLossless => OutputFormat::WEBP,
        }
    }
}

impl std::fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputEncoding::PngOptimized => write!(f, "PngOptimized"),
            OutputEncoding::WebpLossy { quality } => write!(f, "WebpLossy({})", quality),
            OutputEncoding::WebpLossless => write!(f, "WebpLossless"),
        }
    }
}
