//! Plain nearest-neighbor resize for callers that need 1:1 pixel copies

use crate::palette::Color;
use crate::sampler::buffer::PixelBuffer;

/// Resize a buffer by nearest-neighbor lookup, with no averaging
///
/// Each target pixel copies the source pixel at `(x·W₀/Wₜ, y·H₀/Hₜ)`,
/// clamped to valid indices. A resize to the source's own dimensions returns
/// an element-for-element copy. An empty source (or an empty target size)
/// yields an empty buffer.
pub fn nearest_neighbor(source: &PixelBuffer, new_width: usize, new_height: usize) -> PixelBuffer {
    if source.is_empty() || new_width == 0 || new_height == 0 {
        return PixelBuffer::empty();
    }

    let source_width = source.width();
    let source_height = source.height();

    PixelBuffer::from_fn(new_width, new_height, |x, y| {
        let source_x = (x * source_width / new_width).min(source_width - 1);
        let source_y = (y * source_height / new_height).min(source_height - 1);
        // Indices are clamped into bounds, so the lookup cannot miss
        source.get(source_x, source_y).unwrap_or(Color::WHITE)
    })
}
