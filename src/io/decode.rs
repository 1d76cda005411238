//! Image decoding into pixel buffers, with bounding and synthetic fallback

use crate::io::configuration::{FALLBACK_SOURCE_SIZE, MAX_SOURCE_DIMENSION};
use crate::io::error::{PatternError, Result};
use crate::palette::Color;
use crate::quantize::synthetic;
use crate::sampler::buffer::PixelBuffer;
use crate::sampler::resize::nearest_neighbor;
use std::path::Path;

/// Decode image bytes into a pixel buffer, preserving alpha as decoded
///
/// Images larger than [`MAX_SOURCE_DIMENSION`] in either dimension are
/// downscaled with a uniform nearest-neighbor scale before being returned.
///
/// # Errors
///
/// Returns an error when the bytes are not a decodable image.
pub fn decode_pixels(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(|e| PatternError::ImageDecode {
        path: "<memory>".into(),
        source: e,
    })?;
    Ok(bound_size(&buffer_from_rgba(&img.to_rgba8())))
}

/// Load and decode an image file into a pixel buffer
///
/// # Errors
///
/// Returns an error when the file cannot be opened or decoded.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|e| PatternError::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(bound_size(&buffer_from_rgba(&img.to_rgba8())))
}

/// Load an image, falling back to a seeded synthetic gradient on failure
///
/// The decode contract requires a usable buffer rather than a hard failure:
/// when the file is unreadable or undecodable the pipeline continues with a
/// deterministic [`FALLBACK_SOURCE_SIZE`]² noisy gradient.
pub fn load_or_synthetic(path: &Path, seed: u64) -> PixelBuffer {
    load_pixel_buffer(path).unwrap_or_else(|_| {
        synthetic::noisy_gradient(FALLBACK_SOURCE_SIZE, FALLBACK_SOURCE_SIZE, seed)
    })
}

fn buffer_from_rgba(rgba: &image::RgbaImage) -> PixelBuffer {
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;

    let mut pixels = Vec::with_capacity(width * height);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        pixels.push(Color::new(
            i32::from(r),
            i32::from(g),
            i32::from(b),
            i32::from(a),
        ));
    }

    // enumerate order is row-major, so the length always matches
    PixelBuffer::from_pixels(width, height, pixels).unwrap_or_else(PixelBuffer::empty)
}

// Downscales oversized sources with a uniform scale so aspect is preserved
fn bound_size(buffer: &PixelBuffer) -> PixelBuffer {
    let width = buffer.width();
    let height = buffer.height();
    if width <= MAX_SOURCE_DIMENSION && height <= MAX_SOURCE_DIMENSION {
        return buffer.clone();
    }

    let scale = (MAX_SOURCE_DIMENSION as f64 / width as f64)
        .min(MAX_SOURCE_DIMENSION as f64 / height as f64);
    let new_width = ((width as f64 * scale) as usize).max(1);
    let new_height = ((height as f64 * scale) as usize).max(1);
    nearest_neighbor(buffer, new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::bound_size;
    use crate::palette::Color;
    use crate::sampler::buffer::PixelBuffer;

    #[test]
    fn test_bound_size_leaves_small_buffers_untouched() {
        let buffer = PixelBuffer::from_fn(10, 20, |_, _| Color::WHITE);
        assert_eq!(bound_size(&buffer), buffer);
    }

    #[test]
    fn test_bound_size_downscales_preserving_aspect() {
        let buffer = PixelBuffer::from_fn(2000, 1000, |_, _| Color::WHITE);
        let bounded = bound_size(&buffer);
        assert_eq!(bounded.width(), 1000);
        assert_eq!(bounded.height(), 500);
    }
}
