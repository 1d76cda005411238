//! Pipeline constants and runtime configuration defaults

// Safety limit to cap memory and running time per generate call
/// Maximum source dimension accepted by the decode step; larger images are
/// downscaled before entering the pipeline
pub const MAX_SOURCE_DIMENSION: usize = 1000;

/// Dimensions of the synthetic buffer used when decoding fails or no image
/// bytes are supplied
pub const FALLBACK_SOURCE_SIZE: usize = 100;

// Default values for configurable parameters
/// Default target grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 50;

/// Fixed seed for reproducible synthetic generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output pattern filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
