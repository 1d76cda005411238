//! Region sampling: cell-to-rectangle mapping and truncating color averaging

use crate::palette::Color;
use crate::sampler::buffer::PixelBuffer;
use std::ops::Range;

/// Configurable sampling behavior
///
/// Both knobs cover behaviors that historically varied between call sites;
/// they are explicit configuration rather than hard-coded choices because
/// they change averaged results at image edges and transparent regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Keep fully transparent (alpha = 0) source pixels in the sample set
    ///
    /// Defaults to `true`; disabling it drops transparent pixels before
    /// averaging.
    pub include_transparent_samples: bool,
    /// Color returned when a target cell maps to zero source pixels
    ///
    /// Defaults to opaque white.
    pub empty_region_default: Color,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            include_transparent_samples: true,
            empty_region_default: Color::WHITE,
        }
    }
}

/// Source rectangle covered by target cell `(x, y)`
///
/// Bounds use truncating integer division and are clamped into the source
/// dimensions; the ranges are half-open and may be empty when the target
/// grid exceeds the source in some dimension.
pub fn region_bounds(
    x: usize,
    y: usize,
    target_width: usize,
    target_height: usize,
    source_width: usize,
    source_height: usize,
) -> (Range<usize>, Range<usize>) {
    if target_width == 0 || target_height == 0 {
        return (0..0, 0..0);
    }
    let min_x = (x * source_width / target_width).min(source_width);
    let max_x = ((x + 1) * source_width / target_width).min(source_width);
    let min_y = (y * source_height / target_height).min(source_height);
    let max_y = ((y + 1) * source_height / target_height).min(source_height);
    (min_x..max_x, min_y..max_y)
}

/// Collect every source color mapped to target cell `(x, y)`
///
/// Fully transparent pixels are dropped when the config says so.
pub fn collect_region(
    source: &PixelBuffer,
    x: usize,
    y: usize,
    target_width: usize,
    target_height: usize,
    config: &SamplerConfig,
) -> Vec<Color> {
    let (xs, ys) = region_bounds(
        x,
        y,
        target_width,
        target_height,
        source.width(),
        source.height(),
    );

    let mut colors = Vec::with_capacity(xs.len() * ys.len());
    for sy in ys {
        for sx in xs.clone() {
            if let Some(color) = source.get(sx, sy) {
                if config.include_transparent_samples || !color.is_transparent() {
                    colors.push(color);
                }
            }
        }
    }
    colors
}

/// Per-channel mean using integer sums and truncating division
///
/// Truncation (not rounding) keeps results bit-for-bit reproducible across
/// implementations. An empty slice yields `fallback`.
pub fn average_color(colors: &[Color], fallback: Color) -> Color {
    if colors.is_empty() {
        return fallback;
    }

    let mut r: u64 = 0;
    let mut g: u64 = 0;
    let mut b: u64 = 0;
    let mut a: u64 = 0;
    for color in colors {
        r += u64::from(color.r);
        g += u64::from(color.g);
        b += u64::from(color.b);
        a += u64::from(color.a);
    }

    let count = colors.len() as u64;
    Color::new(
        (r / count) as i32,
        (g / count) as i32,
        (b / count) as i32,
        (a / count) as i32,
    )
}

/// Averaged color of the source region behind target cell `(x, y)`
pub fn sample_region(
    source: &PixelBuffer,
    x: usize,
    y: usize,
    target_width: usize,
    target_height: usize,
    config: &SamplerConfig,
) -> Color {
    let colors = collect_region(source, x, y, target_width, target_height, config);
    average_color(&colors, config.empty_region_default)
}
