//! JSON persistence for generated patterns
//!
//! The durable interchange format is a single JSON object:
//! `{"Width": .., "Height": .., "Palette": [{"Name", "R", "G", "B", "A"}, ..],
//! "PixelData": [".."]}` with the palette array in insertion order and
//! `PixelData` row-major. Loading rebuilds the palette by re-inserting
//! entries in file order so the uniqueness/order invariant survives the
//! round trip.

use crate::io::error::{PatternError, Result, fs_error};
use crate::palette::{Color, Palette};
use crate::quantize::pattern::Pattern;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PatternRecord {
    width: usize,
    height: usize,
    palette: Vec<PaletteColorRecord>,
    pixel_data: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PaletteColorRecord {
    name: String,
    r: i32,
    g: i32,
    b: i32,
    a: i32,
}

/// Serialize a pattern to its JSON record form
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json(pattern: &Pattern) -> Result<String> {
    let record = PatternRecord {
        width: pattern.width(),
        height: pattern.height(),
        palette: pattern
            .palette()
            .iter()
            .map(|(name, color)| PaletteColorRecord {
                name: name.to_string(),
                r: i32::from(color.r),
                g: i32::from(color.g),
                b: i32::from(color.b),
                a: i32::from(color.a),
            })
            .collect(),
        pixel_data: pattern.pixel_data().to_vec(),
    };

    serde_json::to_string_pretty(&record).map_err(|e| PatternError::PatternFormat {
        path: "<memory>".into(),
        source: e,
    })
}

/// Reconstruct a pattern from its JSON record form
///
/// # Errors
///
/// Returns an error when the JSON is unparseable or the grid length does not
/// match `Width * Height`.
pub fn from_json(json: &str) -> Result<Pattern> {
    let record: PatternRecord =
        serde_json::from_str(json).map_err(|e| PatternError::PatternFormat {
            path: "<memory>".into(),
            source: e,
        })?;

    let mut palette = Palette::new();
    for entry in &record.palette {
        palette.add(&entry.name, Color::new(entry.r, entry.g, entry.b, entry.a));
    }

    Pattern::from_parts(record.width, record.height, palette, record.pixel_data).ok_or_else(
        || PatternError::InvalidPattern {
            reason: format!(
                "pixel data length does not match {}x{} grid",
                record.width, record.height
            ),
        },
    )
}

/// Save a pattern to a JSON file
///
/// # Errors
///
/// Returns an error when serialization fails or the file cannot be written.
pub fn save(path: &Path, pattern: &Pattern) -> Result<()> {
    let json = to_json(pattern)?;
    std::fs::write(path, json).map_err(|e| fs_error(path, "write pattern file", e))
}

/// Load a pattern from a JSON file
///
/// Failures surface as an error result; callers keep [`Pattern::empty`] as
/// the safe default rather than receiving a partially built pattern.
///
/// # Errors
///
/// Returns an error when the file is unreadable, the JSON is unparseable, or
/// the record violates a structural invariant.
pub fn load(path: &Path) -> Result<Pattern> {
    let json =
        std::fs::read_to_string(path).map_err(|e| fs_error(path, "read pattern file", e))?;
    from_json(&json).map_err(|e| match e {
        PatternError::PatternFormat { source, .. } => PatternError::PatternFormat {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
