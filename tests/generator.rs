//! End-to-end tests for derivative generation and logo optimization,
//! driven through the public API against a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use respimg::{
    Error, ImageJob, LogoSpec, OutputEncoding, SourceImageSpec, generate_derivatives,
    optimize_logo, run_batch,
};

fn write_png_fixture(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(path).expect("failed to write fixture");
}

fn decoded_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("output did not decode");
    (img.width(), img.height())
}

fn mapview_spec(path: PathBuf, widths: &[u32]) -> SourceImageSpec {
    SourceImageSpec {
        path,
        target_widths: widths.to_vec(),
        outputs: vec![
            OutputEncoding::PngOptimized,
            OutputEncoding::WebpLossy { quality: 75 },
        ],
    }
}

#[test]
fn generates_all_widths_in_both_formats() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ios_mapview.png");
    write_png_fixture(&source, 1200, 600);

    let spec = mapview_spec(source.clone(), &[300, 480, 800]);
    let derivatives = generate_derivatives(&spec).unwrap().expect("source exists");

    assert_eq!(derivatives.len(), 6);

    for (width, height) in [(300, 150), (480, 240), (800, 400)] {
        let png = dir.path().join(format!("ios_mapview_{width}.png"));
        let webp = dir.path().join(format!("ios_mapview_{width}.webp"));
        assert_eq!(decoded_dimensions(&png), (width, height));
        assert_eq!(decoded_dimensions(&webp), (width, height));
    }

    for d in &derivatives {
        assert!(d.output_path.exists());
        assert_eq!(
            d.height,
            ((d.width as f64) * 600.0 / 1200.0).round() as u32
        );
    }
}

#[test]
fn missing_source_is_a_skip_with_no_output() {
    let dir = TempDir::new().unwrap();
    let spec = mapview_spec(dir.path().join("absent.png"), &[300]);

    let outcome = generate_derivatives(&spec).unwrap();
    assert!(outcome.is_none());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn empty_and_zero_widths_are_rejected() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ios_mapview.png");
    write_png_fixture(&source, 100, 50);

    let empty = mapview_spec(source.clone(), &[]);
    assert!(matches!(
        generate_derivatives(&empty),
        Err(Error::EmptyWidths { .. })
    ));

    let zero = mapview_spec(source, &[300, 0]);
    assert!(matches!(
        generate_derivatives(&zero),
        Err(Error::ZeroWidth { width: 0 })
    ));

    // Validation runs before any decode or write
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn out_of_range_webp_quality_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ios_mapview.png");
    write_png_fixture(&source, 100, 50);

    let spec = SourceImageSpec {
        path: source,
        target_widths: vec![50],
        outputs: vec![OutputEncoding::WebpLossy { quality: 101 }],
    };
    assert!(matches!(
        generate_derivatives(&spec),
        Err(Error::InvalidArgument { arg: "quality", .. })
    ));
}

#[test]
fn lossless_webp_output_decodes_at_target_size() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ios_mapview.png");
    write_png_fixture(&source, 640, 480);

    let spec = SourceImageSpec {
        path: source,
        target_widths: vec![320],
        outputs: vec![OutputEncoding::WebpLossless],
    };
    let derivatives = generate_derivatives(&spec).unwrap().unwrap();
    assert_eq!(derivatives.len(), 1);
    assert_eq!(
        decoded_dimensions(&dir.path().join("ios_mapview_320.webp")),
        (320, 240)
    );
}

#[test]
fn decode_failure_does_not_block_other_sources() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.png");
    fs::write(&bad, b"not an image").unwrap();
    let good = dir.path().join("good.png");
    write_png_fixture(&good, 400, 200);

    let jobs = vec![
        ImageJob::Responsive(mapview_spec(bad, &[100])),
        ImageJob::Responsive(mapview_spec(good, &[100])),
    ];

    let report = run_batch(&jobs, true).unwrap();
    assert_eq!(report.errors, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 0);

    assert_eq!(
        decoded_dimensions(&dir.path().join("good_100.png")),
        (100, 50)
    );
}

#[test]
fn batch_without_continue_on_error_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.png");
    fs::write(&bad, b"not an image").unwrap();
    let good = dir.path().join("good.png");
    write_png_fixture(&good, 400, 200);

    let jobs = vec![
        ImageJob::Responsive(mapview_spec(bad, &[100])),
        ImageJob::Responsive(mapview_spec(good, &[100])),
    ];

    assert!(run_batch(&jobs, false).is_err());
    assert!(!dir.path().join("good_100.png").exists());
}

#[test]
fn small_logo_keeps_its_width_in_place() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    write_png_fixture(&logo, 400, 200);

    let spec = LogoSpec {
        path: logo.clone(),
        ..LogoSpec::default()
    };
    let derivatives = optimize_logo(&spec).unwrap().unwrap();

    // In-place file plus the 64px PNG/WebP pair
    assert_eq!(derivatives.len(), 3);
    assert_eq!(decoded_dimensions(&logo), (400, 200));
    assert_eq!(
        decoded_dimensions(&dir.path().join("logo_64.png")),
        (64, 32)
    );
    assert_eq!(
        decoded_dimensions(&dir.path().join("logo_64.webp")),
        (64, 32)
    );
}

#[test]
fn logo_at_threshold_is_not_resized() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    write_png_fixture(&logo, 512, 256);

    let spec = LogoSpec {
        path: logo.clone(),
        small_width: None,
        ..LogoSpec::default()
    };
    optimize_logo(&spec).unwrap().unwrap();
    assert_eq!(decoded_dimensions(&logo), (512, 256));
}

#[test]
fn oversized_logo_is_capped_in_place() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    write_png_fixture(&logo, 1024, 512);

    let spec = LogoSpec {
        path: logo.clone(),
        ..LogoSpec::default()
    };
    let derivatives = optimize_logo(&spec).unwrap().unwrap();

    assert_eq!(decoded_dimensions(&logo), (512, 256));
    assert_eq!(
        decoded_dimensions(&dir.path().join("logo_64.png")),
        (64, 32)
    );

    let in_place = &derivatives[0];
    assert_eq!((in_place.width, in_place.height), (512, 256));
    assert_eq!(in_place.output_path, logo);
}

#[test]
fn missing_logo_is_a_skip() {
    let dir = TempDir::new().unwrap();
    let spec = LogoSpec {
        path: dir.path().join("logo.png"),
        ..LogoSpec::default()
    };
    assert!(optimize_logo(&spec).unwrap().is_none());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn repeated_runs_agree_on_output_dimensions() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ios_mapview.png");
    write_png_fixture(&source, 1200, 600);

    let spec = mapview_spec(source, &[300, 480, 800]);

    let first = generate_derivatives(&spec).unwrap().unwrap();
    let first_dims: Vec<_> = first
        .iter()
        .map(|d| (d.output_path.clone(), decoded_dimensions(&d.output_path)))
        .collect();

    let second = generate_derivatives(&spec).unwrap().unwrap();
    let second_dims: Vec<_> = second
        .iter()
        .map(|d| (d.output_path.clone(), decoded_dimensions(&d.output_path)))
        .collect();

    assert_eq!(first_dims, second_dims);
}
