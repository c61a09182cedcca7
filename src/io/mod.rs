//! I/O layer for reading source images and writing encoded derivatives.
//! Provides the `reader` for decoding sources and `writers` for PNG/WebP
//! outputs.
pub mod reader;
pub use reader::{ReadError, SourceImage};

pub mod writers;
