//! Palette-constrained pixel art quantization for bead patterns
//!
//! The pipeline takes a decoded pixel buffer, averages the source region
//! behind each target grid cell, snaps the average to the nearest color of a
//! named palette, and persists the resulting grid together with the palette
//! that produced it.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Color values and ordered named palettes
pub mod palette;
/// Pattern generation: palette quantization over sampled regions
pub mod quantize;
/// Region sampling and pixel buffer utilities
pub mod sampler;

pub use io::error::{PatternError, Result};
