//! Source image reader backed by the `image` crate.
//! Distinguishes a missing source (skippable) from an unreadable one
//! (a per-source failure).
use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded source image. Held in memory for the duration of one source's
/// processing; every derivative resize borrows the same bitmap, so the
/// source is decoded exactly once per run.
pub struct SourceImage {
    path: PathBuf,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Open and fully decode the source at `path`.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let pixels = image::open(path)?.to_rgba8();
        info!("Opened {:?} ({}x{})", path, pixels.width(), pixels.height());
        Ok(Self {
            path: path.to_path_buf(),
            pixels,
        })
    }

    /// Open the source if it exists; `Ok(None)` with a warning when the
    /// file is absent.
    pub fn open_if_exists(path: &Path) -> Result<Option<Self>, ReadError> {
        if !path.exists() {
            warn!("{:?} not found, skipping", path);
            return Ok(None);
        }
        Ok(Some(Self::open(path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
