//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and reader errors, and provides semantic variants
//! for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source reader error: {0}")]
    Read(#[from] crate::io::ReadError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Width must be greater than 0, got: {width}")]
    ZeroWidth { width: u32 },

    #[error("No target widths configured for: {path}")]
    EmptyWidths { path: String },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
