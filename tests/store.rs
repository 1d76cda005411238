//! Validates the JSON pattern interchange format and its round-trip law

// Test assertions unwrap known-good values; a panic is the failure signal
#![allow(clippy::unwrap_used, clippy::expect_used)]

use beadgrid::io::store;
use beadgrid::palette::{Color, Palette};
use beadgrid::quantize::generator::generate;
use beadgrid::quantize::pattern::Pattern;
use beadgrid::quantize::synthetic;
use beadgrid::sampler::region::SamplerConfig;

fn sample_palette() -> Palette {
    let mut palette = Palette::new();
    palette.add("Snow", Color::opaque(255, 255, 255));
    palette.add("Coal", Color::opaque(0, 0, 0));
    palette.add("Haze", Color::new(128, 128, 128, 64));
    palette
}

fn sample_pattern() -> Pattern {
    let palette = sample_palette();
    let source = synthetic::noisy_gradient(24, 24, 5);
    let (pattern, _) = generate(&source, 6, 6, &palette, &SamplerConfig::default());
    pattern
}

#[test]
fn test_round_trip_preserves_everything() {
    let pattern = sample_pattern();

    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path().join("pattern.json");

    store::save(&path, &pattern).expect("save should succeed");
    let loaded = store::load(&path).expect("load should succeed");

    assert_eq!(loaded, pattern);
    assert_eq!(loaded.palette().name_at(0), Some("Snow"));
    assert_eq!(loaded.palette().name_at(2), Some("Haze"));
    assert_eq!(loaded.palette().get("Haze"), Some(Color::new(128, 128, 128, 64)));
}

#[test]
fn test_json_uses_stable_field_names() {
    let json = store::to_json(&sample_pattern()).expect("serialization should succeed");

    assert!(json.contains("\"Width\""));
    assert!(json.contains("\"Height\""));
    assert!(json.contains("\"Palette\""));
    assert!(json.contains("\"PixelData\""));
    assert!(json.contains("\"Name\""));
    assert!(json.contains("\"R\""));
    assert!(json.contains("\"A\""));
}

#[test]
fn test_palette_file_order_becomes_palette_order() {
    let json = r##"{
        "Width": 1,
        "Height": 1,
        "Palette": [
            {"Name": "Second-Listed-First", "R": 10, "G": 20, "B": 30, "A": 255},
            {"Name": "Alpha", "R": 1, "G": 2, "B": 3, "A": 255}
        ],
        "PixelData": ["#0A141E"]
    }"##;

    let pattern = store::from_json(json).expect("well-formed record should parse");
    assert_eq!(pattern.palette().name_at(0), Some("Second-Listed-First"));
    assert_eq!(pattern.palette().name_at(1), Some("Alpha"));
    assert_eq!(pattern.code_at(0, 0), Some("#0A141E"));
}

#[test]
fn test_out_of_range_channels_clamp_on_load() {
    let json = r##"{
        "Width": 0,
        "Height": 0,
        "Palette": [{"Name": "Hot", "R": 300, "G": -5, "B": 128, "A": 255}],
        "PixelData": []
    }"##;

    let pattern = store::from_json(json).expect("record should parse");
    assert_eq!(pattern.palette().get("Hot"), Some(Color::opaque(255, 0, 128)));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(store::from_json("not json at all").is_err());
    assert!(store::from_json("{\"Width\": 2}").is_err());
}

#[test]
fn test_grid_length_mismatch_is_rejected() {
    let json = r##"{
        "Width": 2,
        "Height": 2,
        "Palette": [],
        "PixelData": ["#FFFFFF"]
    }"##;

    assert!(store::from_json(json).is_err());
}

#[test]
fn test_missing_file_is_an_error_and_empty_default_stands() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path().join("does-not-exist.json");

    let result = store::load(&path);
    assert!(result.is_err());

    // Callers fall back to the safe empty default on failure
    let fallback = Pattern::empty();
    assert_eq!(fallback.width(), 0);
    assert_eq!(fallback.height(), 0);
    assert!(fallback.palette().is_empty());
    assert!(fallback.pixel_data().is_empty());
}

#[test]
fn test_palette_text_file_round_trips() {
    let palette = sample_palette();

    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path().join("beads.txt");

    beadgrid::io::asset::write_palette_file(&path, &palette).expect("write should succeed");
    let loaded = beadgrid::io::asset::load_palette_file(&path).expect("load should succeed");

    assert_eq!(loaded, palette);
    assert_eq!(loaded.name_at(0), Some("Snow"));
}

#[test]
fn test_decode_preserves_pixels_and_alpha() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, image::Rgba([40, 50, 60, 0]));

    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("in-memory PNG encode should succeed");

    let buffer = beadgrid::io::decode::decode_pixels(&bytes).expect("decode should succeed");
    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 1);
    assert_eq!(buffer.get(0, 0), Some(Color::new(10, 20, 30, 255)));
    assert_eq!(buffer.get(1, 0), Some(Color::new(40, 50, 60, 0)));
}

#[test]
fn test_undecodable_input_is_an_error_but_fallback_is_seeded() {
    assert!(beadgrid::io::decode::decode_pixels(b"not an image").is_err());

    let missing = std::path::Path::new("/nonexistent/input.png");
    let fallback = beadgrid::io::decode::load_or_synthetic(missing, 42);
    assert_eq!(fallback.width(), 100);
    assert_eq!(fallback.height(), 100);
    assert_eq!(fallback, synthetic::noisy_gradient(100, 100, 42));
}

#[test]
fn test_empty_pattern_round_trips() {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path().join("empty.json");

    store::save(&path, &Pattern::empty()).expect("save should succeed");
    let loaded = store::load(&path).expect("load should succeed");
    assert_eq!(loaded, Pattern::empty());
}
