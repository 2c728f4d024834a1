//! Validation error types

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Query string missing a parameter or carrying one of the wrong type
    InvalidQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery { reason } => write!(f, "invalid query parameters: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
