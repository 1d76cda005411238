//! Region sampling and pixel buffer utilities

/// Dense row-major pixel buffer backing the quantization pipeline
pub mod buffer;
/// Region sampling: cell-to-rectangle mapping and truncating color averaging
pub mod region;
/// Plain nearest-neighbor resize for callers that need 1:1 pixel copies
pub mod resize;

pub use buffer::PixelBuffer;
pub use region::SamplerConfig;
