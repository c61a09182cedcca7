//! Command line layer for RESPIMG.
//!
//! The binary takes no arguments: the canonical job list is fixed
//! configuration (`runner::site_jobs`) matching the site's `public/`
//! asset layout, and `runner::run` drives it through `respimg::api`.
//!
//! If you are embedding RESPIMG into another application, prefer the
//! high-level `respimg::api` module instead of calling the CLI code.
pub mod runner;

pub use runner::run;
