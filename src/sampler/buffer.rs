//! Dense row-major pixel buffer backing the quantization pipeline

use crate::palette::Color;
use ndarray::Array2;

/// A decoded image as a dense grid of colors
///
/// Storage is row-major (`(row, column)` = `(y, x)`), matching the raw
/// buffer contract of the external image codec. A zero-area buffer is the
/// "no source image" marker understood by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array2<Color>,
}

impl PixelBuffer {
    /// Build a buffer from a row-major pixel vector
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        Array2::from_shape_vec((height, width), pixels)
            .ok()
            .map(|data| Self { data })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Color,
    {
        Self {
            data: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// A zero-area buffer, the "no source image" marker
    pub fn empty() -> Self {
        Self {
            data: Array2::from_shape_fn((0, 0), |_| Color::WHITE),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Whether the buffer covers no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The color at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.data.get((y, x)).copied()
    }

    /// Iterate all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data.iter().copied()
    }
}
