//! # Harvest Error Types
//!
//! Errors at the edges of the drop model. The model itself is total and
//! never fails; only loading configuration can.

use thiserror::Error;

/// Errors that can occur while setting up the harvest system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarvestError {
    /// Configuration parsed but holds an unusable value, or did not parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("cannot read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

/// Result type for harvest setup operations.
pub type HarvestResult<T> = Result<T, HarvestError>;
