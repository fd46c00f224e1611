//! Custom error types for the crate.
//!
//! This module defines the primary error type, `ScanError`. Using the `thiserror`
//! crate, it provides a single place to describe everything that can go wrong, from
//! malformed scan geometry to configuration and export failures.
//!
//! ## Error Hierarchy
//!
//! - **`InvalidGeometry`**: A geometry field is zero, negative, or not finite. These are
//!   rejected before any sample is computed.
//! - **`DegenerateLength`**: An axis ramp was asked to span fewer than two samples, which
//!   would make the per-sample voltage step undefined.
//! - **`BufferSize`**: The caller handed in an output buffer shorter than the extent given
//!   by the size calculators. Nothing is written in that case.
//! - **`Allocation`**: A scratch buffer could not be reserved. The caller's buffer is left
//!   untouched.
//! - **`Config`**, **`Io`**, **`Csv`**, **`Serialization`**: Wrapped errors from the
//!   configuration, file, and export layers.
//! - **`FeatureNotEnabled`**: Functionality that was compiled out via feature flags.
//!
//! By using `#[from]`, `ScanError` can be created from the underlying error types,
//! so the `?` operator works throughout the crate.

use std::collections::TryReserveError;
use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Scan axis, used to tag axis-specific failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Fast (line) axis.
    X,
    /// Slow (frame) axis.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid geometry: {field} {reason}")]
    InvalidGeometry {
        field: &'static str,
        reason: String,
    },

    #[error("Degenerate {axis} axis: active length {len} must be at least 2")]
    DegenerateLength { axis: Axis, len: usize },

    #[error("Output buffer too small: need {expected} elements, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Failed to allocate scratch buffer: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Configuration validation error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "storage_csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feature '{0}' is not enabled. Please build with --features {0}")]
    FeatureNotEnabled(String),
}

impl ScanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScanError::InvalidGeometry {
            field,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by the caller's parameters rather than by
    /// the environment (allocation, files, configuration sources).
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidGeometry { .. }
                | ScanError::DegenerateLength { .. }
                | ScanError::BufferSize { .. }
        )
    }
}
