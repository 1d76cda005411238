//! The generated pattern artifact: a grid of palette hex codes

use crate::palette::Palette;

/// A generated bead pattern
///
/// Holds the target grid dimensions, the palette the grid was quantized
/// against, and a row-major vector of hex color codes (row 0 first, length
/// `width * height`). Patterns are immutable once produced; single-cell
/// edits go through [`Self::with_pixel`], which returns a new pattern so
/// hosts can detect the change by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    width: usize,
    height: usize,
    palette: Palette,
    pixel_data: Vec<String>,
}

impl Pattern {
    /// Assemble a pattern from its parts
    ///
    /// Returns `None` when `pixel_data.len() != width * height`.
    pub fn from_parts(
        width: usize,
        height: usize,
        palette: Palette,
        pixel_data: Vec<String>,
    ) -> Option<Self> {
        (pixel_data.len() == width * height).then_some(Self {
            width,
            height,
            palette,
            pixel_data,
        })
    }

    /// The safe empty default: zero dimensions, empty palette, empty grid
    pub fn empty() -> Self {
        Self::default()
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The palette the grid was quantized against
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The row-major grid of hex codes
    pub fn pixel_data(&self) -> &[String] {
        &self.pixel_data
    }

    /// The hex code at cell `(x, y)`, or `None` when out of bounds
    pub fn code_at(&self, x: usize, y: usize) -> Option<&str> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixel_data.get(y * self.width + x).map(String::as_str)
    }

    /// Replace the code at cell `(x, y)`, returning a new pattern
    ///
    /// The receiver is never mutated. Out-of-range coordinates return an
    /// unchanged copy.
    pub fn with_pixel(&self, x: usize, y: usize, code: &str) -> Self {
        let mut edited = self.clone();
        if x < self.width && y < self.height {
            if let Some(cell) = edited.pixel_data.get_mut(y * self.width + x) {
                *cell = code.to_string();
            }
        }
        edited
    }
}
