//! Error types for the wave explorer core.

use std::fmt;

/// Errors surfaced by the computation pipeline.
///
/// All variants are precondition violations: they are rejected before any
/// computation proceeds, and no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// A caller-supplied parameter violated a precondition
    InvalidParameter(String),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for ExplorerError {}
