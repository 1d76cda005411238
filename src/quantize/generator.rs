//! Drives the region sampler and palette search to build a full pattern

use crate::palette::{Color, Palette};
use crate::quantize::pattern::Pattern;
use crate::sampler::buffer::PixelBuffer;
use crate::sampler::region::{SamplerConfig, sample_region};
use std::collections::HashMap;

/// Hex code of the fallback fill used when no source pixels exist
pub const FALLBACK_CODE: &str = "#FFFFFF";

/// Per-hex-code cell counts accumulated during generation
pub type UsageCounts = HashMap<String, usize>;

/// Quantize a source buffer into a `target_width × target_height` pattern
///
/// For every target cell in row-major order: average the source region
/// behind it, find the closest palette color, and write that color's hex
/// code into the grid while counting per-code usage. An empty source buffer
/// yields a grid filled with opaque white and an empty usage map; this is a
/// defined fallback rather than a failure.
///
/// Cost is `O(W₀·H₀ + Wₜ·Hₜ·palette.len())`, dominated by the linear palette
/// scan per target cell. Inputs are never mutated and no state is shared, so
/// concurrent calls over independent buffers are safe by construction.
pub fn generate(
    source: &PixelBuffer,
    target_width: usize,
    target_height: usize,
    palette: &Palette,
    config: &SamplerConfig,
) -> (Pattern, UsageCounts) {
    let cell_count = target_width * target_height;

    if source.is_empty() {
        let pixel_data = vec![FALLBACK_CODE.to_string(); cell_count];
        let pattern = assemble(target_width, target_height, palette, pixel_data);
        return (pattern, UsageCounts::new());
    }

    let mut pixel_data = Vec::with_capacity(cell_count);
    let mut usage = UsageCounts::new();

    for y in 0..target_height {
        for x in 0..target_width {
            let averaged = sample_region(source, x, y, target_width, target_height, config);
            let closest = palette.find_closest(averaged);
            let code = closest.to_hex();
            *usage.entry(code.clone()).or_insert(0) += 1;
            pixel_data.push(code);
        }
    }

    let pattern = assemble(target_width, target_height, palette, pixel_data);
    (pattern, usage)
}

/// Quantize a single color against a palette, returning its hex code
pub fn quantize_color(color: Color, palette: &Palette) -> String {
    palette.find_closest(color).to_hex()
}

fn assemble(width: usize, height: usize, palette: &Palette, pixel_data: Vec<String>) -> Pattern {
    // Length is width * height by construction
    Pattern::from_parts(width, height, palette.clone(), pixel_data).unwrap_or_else(Pattern::empty)
}
