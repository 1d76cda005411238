//! Input/output operations and error handling

/// Tab-separated palette text assets and the built-in default palette
pub mod asset;
/// Command-line interface for batch quantization of PNG files
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Image decoding into pixel buffers, with bounding and synthetic fallback
pub mod decode;
/// Error types for quantization and persistence operations
pub mod error;
/// Batch progress display for multi-file processing
pub mod progress;
/// JSON persistence for generated patterns
pub mod store;
