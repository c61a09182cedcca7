use tracing::{debug, info};

use respimg::api::run_batch;
use respimg::core::params::{
    ImageJob, LogoSpec, SourceImageSpec, MAPVIEW_WIDTHS_2X, WEBP_QUALITY_PHOTO,
};

/// Canonical job list: the responsive map-view renditions plus the logo
/// optimization pass.
pub fn site_jobs() -> Vec<ImageJob> {
    vec![
        ImageJob::Responsive(SourceImageSpec::responsive(
            "public/ios_mapview.png",
            &MAPVIEW_WIDTHS_2X,
            WEBP_QUALITY_PHOTO,
        )),
        ImageJob::Logo(LogoSpec::default()),
    ]
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let jobs = site_jobs();
    debug!("Job configuration: {}", serde_json::to_string_pretty(&jobs)?);

    info!("Starting image generation...");

    // Per-source failures are contained and counted; the run itself
    // always completes.
    let report = run_batch(&jobs, true)?;

    info!("Image generation complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    Ok(())
}
