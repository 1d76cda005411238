//! Color values and ordered named palettes

/// RGBA color value type with hex codec and distance metric
pub mod color;
/// Ordered, name-keyed color collection with nearest-color search
pub mod collection;

pub use collection::Palette;
pub use color::Color;
