#![doc = r#"
RESPIMG — a batch generator of responsive web image derivatives.

This crate turns source raster images into width-scaled copies in two
encodings (optimized PNG and lossy WebP), the way a web frontend wants its
`public/` assets prepared: one decode per source, one resize per target
width with the height derived from the original aspect ratio, and one
output file per width/encoding pair named `<base_name>_<width>.<ext>`.
It also covers the companion logo pass: cap an oversized logo in place and
emit a small header-sized derivative pair. It powers the `respimg` binary
and can be embedded in your own Rust applications.

Quick start: generate derivatives for one source
------------------------------------------------
```rust,no_run
use respimg::{SourceImageSpec, generate_derivatives};

fn main() -> respimg::Result<()> {
    let spec = SourceImageSpec::responsive(
        "public/ios_mapview.png",
        &[300, 480, 600, 800],
        75, // WebP quality
    );

    match generate_derivatives(&spec)? {
        Some(derivatives) => {
            for d in &derivatives {
                println!("{}x{} {} -> {:?}", d.width, d.height, d.format, d.output_path);
            }
        }
        None => println!("source missing, nothing to do"),
    }
    Ok(())
}
```

Logo optimization
-----------------
```rust,no_run
use respimg::{LogoSpec, optimize_logo};

fn main() -> respimg::Result<()> {
    // Cap at 512px wide in place, plus a 64px header pair (PNG + WebP).
    let spec = LogoSpec::default();
    optimize_logo(&spec)?;
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use respimg::{ImageJob, LogoSpec, SourceImageSpec, run_batch};

fn main() -> respimg::Result<()> {
    let jobs = vec![
        ImageJob::Responsive(SourceImageSpec::responsive(
            "public/ios_mapview.png",
            &[300, 480, 800],
            75,
        )),
        ImageJob::Logo(LogoSpec::default()),
    ];

    let report = run_batch(&jobs, true)?; // continue_on_error
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `respimg::Result<T>`; match on `respimg::Error`
to handle specific cases. A missing source is not an error: it is the
`Ok(None)` skip condition. An unreadable or unwritable source is a
per-source error, contained by `run_batch` when `continue_on_error` is set.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (`OutputFormat`, `OutputEncoding`).
- [`core`] — parameter structs, presets, and processing primitives.
- [`io`] — source reader and PNG/WebP writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{ImageJob, LogoSpec, SourceImageSpec};
pub use error::{Error, Result};
pub use types::{OutputEncoding, OutputFormat};

// Readers
pub use io::reader::{ReadError, SourceImage};

// High-level API re-exports
pub use api::{BatchReport, Derivative, generate_derivatives, optimize_logo, run_batch};
