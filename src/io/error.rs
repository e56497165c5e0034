//! Error types and path context for generation runs

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Failed to load a fragment image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a composited edition to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// Configuration file could not be parsed
    Config {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Metadata collection could not be serialized
    Metadata {
        /// Path of the metadata document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Parameter or configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A layer directory entry cannot be turned into a fragment
    InvalidFragmentName {
        /// The offending entry name, lossily converted for display
        file_name: String,
        /// Why the name was rejected
        reason: &'static str,
    },

    /// A layer has no fragments to pick from
    EmptyLayer {
        /// Name of the empty layer
        layer: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::Config { path, source } => {
                write!(f, "Invalid configuration '{}': {source}", path.display())
            }
            Self::Metadata { path, source } => {
                write!(
                    f,
                    "Failed to serialize metadata for '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidFragmentName { file_name, reason } => {
                write!(f, "Invalid fragment name '{file_name}': {reason}")
            }
            Self::EmptyLayer { layer } => {
                write!(f, "Layer '{layer}' has no fragments to select from")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Config { source, .. } | Self::Metadata { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Attaches the path and operation to a failed filesystem call
pub trait WithPath<T> {
    /// Convert an I/O failure into [`GenerationError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
