//! Pattern generation: palette quantization over sampled regions

/// Drives the region sampler and palette search to build a full pattern
pub mod generator;
/// The generated pattern artifact: a grid of palette hex codes
pub mod pattern;
/// Deterministic synthetic source images for testing and simulation
pub mod synthetic;

pub use generator::{UsageCounts, generate};
pub use pattern::Pattern;
