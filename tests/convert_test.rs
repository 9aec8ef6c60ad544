// End-to-end tests for file-based icon conversion
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use icon_converter::icon_converter::pipeline::{OPAQUE_PIXEL, TRANSPARENT_PIXEL};
use icon_converter::icon_converter::{ErrorStage, IconConfig, IconConverter, IconError};
use icon_converter::{DEFAULT_THRESHOLD, convert};
use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "icon-converter-it-{}-{}-{}",
        std::process::id(),
        n,
        name
    ))
}

fn write_gray_png(values: &[u8], width: u32, height: u32) -> PathBuf {
    let path = temp_path("gray.png");
    GrayImage::from_raw(width, height, values.to_vec())
        .expect("buffer size mismatch")
        .save_with_format(&path, ImageFormat::Png)
        .expect("write input failed");
    path
}

fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("open output failed").to_rgba8()
}

#[test]
fn default_threshold_is_200() {
    assert_eq!(DEFAULT_THRESHOLD, 200);
}

#[test]
fn two_by_two_scenario_round_trips_through_files() {
    let input = write_gray_png(&[250, 100, 200, 201], 2, 2);
    let output = temp_path("scenario.png");

    convert(&input, &output, 200).expect("conversion should succeed");
    let icon = read_rgba(&output);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);

    assert_eq!(icon.dimensions(), (2, 2));
    assert_eq!(*icon.get_pixel(0, 0), TRANSPARENT_PIXEL);
    assert_eq!(*icon.get_pixel(1, 0), OPAQUE_PIXEL);
    assert_eq!(*icon.get_pixel(0, 1), OPAQUE_PIXEL);
    assert_eq!(*icon.get_pixel(1, 1), TRANSPARENT_PIXEL);
}

#[test]
fn nonexistent_input_is_decode_failure_and_writes_nothing() {
    let input = temp_path("does-not-exist.png");
    let output = temp_path("never-written.png");

    let err = convert(&input, &output, DEFAULT_THRESHOLD).expect_err("missing input must fail");

    assert_eq!(err.stage(), ErrorStage::Decode);
    assert!(!output.exists());
}

#[test]
fn archive_input_is_rejected_by_signature() {
    let input = temp_path("bundle.zip");
    let output = temp_path("bundle-out.png");
    std::fs::write(&input, [b'P', b'K', 0x03, 0x04, 0x14, 0x00, 0x00, 0x00]).expect("write input failed");

    let err = convert(&input, &output, DEFAULT_THRESHOLD).expect_err("archive input must fail");
    let _ = std::fs::remove_file(&input);

    assert!(matches!(err, IconError::InvalidFormat(_)));
    assert!(!output.exists());
}

#[test]
fn non_image_input_is_decode_failure() {
    let input = temp_path("notes.txt");
    let output = temp_path("notes-out.png");
    std::fs::write(&input, "definitely not pixels").expect("write input failed");

    let err = convert(&input, &output, DEFAULT_THRESHOLD).expect_err("text input must fail");
    let _ = std::fs::remove_file(&input);

    assert!(matches!(err, IconError::InvalidFormat(_)));
    assert_eq!(err.stage(), ErrorStage::Decode);
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_is_encode_failure() {
    let input = write_gray_png(&[0, 255], 2, 1);
    let output = temp_path("missing-dir").join("out.png");

    let err = convert(&input, &output, DEFAULT_THRESHOLD).expect_err("missing dir must fail");
    let _ = std::fs::remove_file(&input);

    assert!(matches!(err, IconError::Write(_)));
    assert_eq!(err.stage(), ErrorStage::Encode);
    assert!(!output.parent().expect("has parent").exists());
}

#[test]
fn repeated_conversion_is_pixel_identical() {
    let source = RgbImage::from_fn(31, 17, |x, y| {
        Rgb([(x * 8 % 256) as u8, (y * 15 % 256) as u8, ((x * y) % 256) as u8])
    });
    let input = temp_path("idempotent.png");
    DynamicImage::ImageRgb8(source)
        .save_with_format(&input, ImageFormat::Png)
        .expect("write input failed");
    let output = temp_path("idempotent-out.png");

    convert(&input, &output, 128).expect("first run should succeed");
    let first = read_rgba(&output);
    convert(&input, &output, 128).expect("second run should succeed");
    let second = read_rgba(&output);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);

    assert_eq!(first, second);
}

#[test]
fn other_formats_keep_dimensions_and_alphabet() {
    let cases = [(ImageFormat::Jpeg, "jpg"), (ImageFormat::Bmp, "bmp")];

    for (format, ext) in cases {
        let source = RgbImage::from_fn(40, 24, |x, _| {
            if x < 20 { Rgb([10u8, 10, 10]) } else { Rgb([245u8, 245, 245]) }
        });
        let input = temp_path(&format!("source.{}", ext));
        DynamicImage::ImageRgb8(source)
            .save_with_format(&input, format)
            .expect("write input failed");
        let output = temp_path(&format!("source-{}-out.png", ext));

        let converter = IconConverter::new(IconConfig::default()).expect("converter init failed");
        let report = converter.convert(&input, &output).expect("conversion should succeed");
        let icon = read_rgba(&output);

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        assert_eq!((report.width, report.height), (40, 24), "{}", ext);
        assert_eq!(icon.dimensions(), (40, 24), "{}", ext);
        assert!(
            icon.pixels().all(|p| *p == OPAQUE_PIXEL || *p == TRANSPARENT_PIXEL),
            "{}",
            ext
        );
        assert_eq!(*icon.get_pixel(0, 0), OPAQUE_PIXEL, "{}", ext);
        assert_eq!(*icon.get_pixel(39, 23), TRANSPARENT_PIXEL, "{}", ext);
    }
}

#[test]
fn source_transparency_is_ignored() {
    // 透明的深色像素仍按亮度归为前景
    let source = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 { Rgba([0u8, 0, 0, 0]) } else { Rgba([255u8, 255, 255, 0]) }
    });
    let input = temp_path("alpha.png");
    DynamicImage::ImageRgba8(source)
        .save_with_format(&input, ImageFormat::Png)
        .expect("write input failed");
    let output = temp_path("alpha-out.png");

    convert(&input, &output, DEFAULT_THRESHOLD).expect("conversion should succeed");
    let icon = read_rgba(&output);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);

    assert_eq!(*icon.get_pixel(0, 0), OPAQUE_PIXEL);
    assert_eq!(*icon.get_pixel(1, 0), TRANSPARENT_PIXEL);
}

#[test]
fn confirmation_names_output_path() {
    let input = write_gray_png(&[10], 1, 1);
    let output = temp_path("confirm.png");

    let converter = IconConverter::new(IconConfig::default()).expect("converter init failed");
    let report = converter.convert(&input, &output).expect("conversion should succeed");

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);

    let message = report.confirmation();
    assert!(message.starts_with('✅'));
    assert!(message.contains(&output.display().to_string()));
}

#[test]
fn large_scan_converts_with_default_config() {
    // 6400x6400 = 40.96MP
    let input = temp_path("large.png");
    GrayImage::from_fn(6_400, 6_400, |x, _| image::Luma([if x < 3_200 { 30 } else { 230 }]))
        .save_with_format(&input, ImageFormat::Png)
        .expect("write input failed");
    let output = temp_path("large-out.png");

    let result = convert(&input, &output, DEFAULT_THRESHOLD);
    let icon = result.as_ref().ok().map(|_| read_rgba(&output));

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);

    result.expect("default config must accept a 40.96MP image");
    let icon = icon.expect("output must exist");
    assert_eq!(icon.dimensions(), (6_400, 6_400));
    assert_eq!(*icon.get_pixel(0, 0), OPAQUE_PIXEL);
    assert_eq!(*icon.get_pixel(6_399, 6_399), TRANSPARENT_PIXEL);
}

#[test]
fn custom_pixel_budget_still_applies() {
    let input = write_gray_png(&[0; 64], 8, 8);
    let output = temp_path("budget-out.png");
    let config = IconConfig {
        max_pixels: 63,
        ..IconConfig::default()
    };

    let err = IconConverter::new(config)
        .expect("converter init failed")
        .convert(&input, &output)
        .expect_err("budget must be enforced");
    let _ = std::fs::remove_file(&input);

    assert!(matches!(err, IconError::ResourceLimit(_)));
    assert_eq!(err.stage(), ErrorStage::Decode);
    assert!(!output.exists());
}
