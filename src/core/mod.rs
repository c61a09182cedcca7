//! Core processing building blocks: aspect-ratio dimension math, resize,
//! and derivative save helpers. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
