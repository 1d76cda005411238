//! Error types for quantization and persistence operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Malformed hex color string (wrong length or non-hex characters)
    InvalidHex {
        /// The offending input string
        value: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Failed to decode image bytes into a pixel buffer
    ImageDecode {
        /// Path to the image file, when one is known
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pattern record failed to serialize or parse
    PatternFormat {
        /// Path to the pattern file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Pattern record parsed but violates a structural invariant
    InvalidPattern {
        /// Description of the violated invariant
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex { value, reason } => {
                write!(f, "Invalid hex color '{value}': {reason}")
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::PatternFormat { path, source } => {
                write!(f, "Malformed pattern file '{}': {source}", path.display())
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid pattern data: {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::PatternFormat { source, .. } => Some(source),
            Self::InvalidHex { .. } | Self::InvalidPattern { .. } => None,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for pattern operation results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create a file system error with full context
pub fn fs_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
