//! Error types, non-fatal warnings, and the outcome carrier
//!
//! Fatal failures (`TilingError`) abort an operation. Warnings
//! (`TilingWarning`) describe data the engine handled by a documented fallback;
//! they are logged when raised and returned alongside the result in an
//! [`Outcome`] so callers can surface them.

use crate::spatial::tiles::TileKind;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Parameter validation failed at the API boundary
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Geometry export requested for a tiling without any vertices
    EmptyTiling,

    /// Failed to serialize compiled geometry
    Export {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to save the rendered preview image
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
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyTiling => write!(f, "Tiling contains no vertices to export"),
            Self::Export { path, source } => {
                write!(
                    f,
                    "Failed to export geometry to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::EmptyTiling => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Non-fatal condition handled by a documented fallback
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TilingWarning {
    /// A tile with no substitution rules was passed through unchanged
    UnsupportedDeflation {
        /// Kind of the tile that was passed through
        kind: TileKind,
    },

    /// A seed name was not recognised; the single thick rhombus was used
    UnknownSeed {
        /// The name that failed to match
        name: String,
    },
}

impl TilingWarning {
    /// Emit this warning through `tracing`
    pub fn log(&self) {
        match self {
            Self::UnsupportedDeflation { kind } => {
                tracing::warn!(kind = %kind, "unsupported deflation, tile passed through");
            }
            Self::UnknownSeed { name } => {
                tracing::warn!(name = %name, "unknown seed, falling back to single-thick");
            }
        }
    }
}

impl fmt::Display for TilingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDeflation { kind } => {
                write!(f, "No deflation rule for {kind}; tile passed through")
            }
            Self::UnknownSeed { name } => {
                write!(f, "Unknown seed '{name}'; using single-thick")
            }
        }
    }
}

impl std::error::Error for TilingWarning {}

/// A value together with the warnings raised while producing it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T> {
    /// The produced value
    pub value: T,
    /// Warnings in the order they were raised
    pub warnings: Vec<TilingWarning>,
}

impl<T> Outcome<T> {
    /// A value with no warnings
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Record a warning, logging it as it is raised
    pub fn warn(&mut self, warning: TilingWarning) {
        warning.log();
        self.warnings.push(warning);
    }

    /// Whether any warning was raised
    pub const fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Split into the value and its warnings
    pub fn into_parts(self) -> (T, Vec<TilingWarning>) {
        (self.value, self.warnings)
    }
}
