//! Error types for Montepi.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Montepi operations.
pub type Result<T> = std::result::Result<T, MontepiError>;

/// Errors that can occur in Montepi.
#[derive(Debug, Error)]
pub enum MontepiError {
    /// A simulation parameter violated its precondition.
    #[error("Invalid parameter '{name}' = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name as exposed on the CLI.
        name: &'static str,
        /// The offending value.
        value: u64,
        /// Human-readable constraint description.
        constraint: &'static str,
    },

    /// IO error (terminal backend, log file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl MontepiError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, value: u64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}
