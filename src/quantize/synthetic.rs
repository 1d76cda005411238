//! Deterministic synthetic source images for testing and simulation

use crate::palette::{Color, Palette};
use crate::quantize::generator::{UsageCounts, generate};
use crate::quantize::pattern::Pattern;
use crate::sampler::buffer::PixelBuffer;
use crate::sampler::region::SamplerConfig;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Per-channel amplitude of the optional gradient noise
pub const NOISE_AMPLITUDE: i32 = 30;

/// A smooth deterministic color gradient
///
/// Pixel `(x, y)` gets `r = x·255/W`, `g = y·255/H`, `b = (x+y)·128/(W+H)`
/// with truncating division and full opacity. Zero dimensions yield an empty
/// buffer.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    if width == 0 || height == 0 {
        return PixelBuffer::empty();
    }
    PixelBuffer::from_fn(width, height, |x, y| gradient_pixel(x, y, width, height))
}

/// The gradient perturbed by bounded random noise
///
/// Each channel is shifted by a value in `[-NOISE_AMPLITUDE,
/// NOISE_AMPLITUDE]` and reclamped to `[0, 255]`. Randomness comes entirely
/// from the given seed, so identical seeds reproduce identical buffers.
pub fn noisy_gradient(width: usize, height: usize, seed: u64) -> PixelBuffer {
    if width == 0 || height == 0 {
        return PixelBuffer::empty();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let base = gradient_pixel(x, y, width, height);
            pixels.push(Color::new(
                i32::from(base.r) + rng.random_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE),
                i32::from(base.g) + rng.random_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE),
                i32::from(base.b) + rng.random_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE),
                255,
            ));
        }
    }

    // Length matches width * height by construction
    PixelBuffer::from_pixels(width, height, pixels).unwrap_or_else(PixelBuffer::empty)
}

/// Generate a pattern from a noisy gradient, with no source image
///
/// The synthetic buffer runs through the same palette-matching step as real
/// images.
pub fn generate_synthetic(
    width: usize,
    height: usize,
    palette: &Palette,
    seed: u64,
) -> (Pattern, UsageCounts) {
    let source = noisy_gradient(width, height, seed);
    generate(&source, width, height, palette, &SamplerConfig::default())
}

fn gradient_pixel(x: usize, y: usize, width: usize, height: usize) -> Color {
    let r = x * 255 / width;
    let g = y * 255 / height;
    let b = (x + y) * 128 / (width + height);
    Color::opaque(r as i32, g as i32, b as i32)
}
