//! Error types for lexigraph-core.
//!
//! Absent vertices are not errors: traversals over an unknown start vertex
//! return empty results. Errors are reserved for malformed calls and input.

use thiserror::Error;

/// Lexigraph error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed call: unset vertex label, weight presence not matching the
    /// graph's `weighted` flag, or an impossible generator request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed edge-list input.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input (0 when the input is empty).
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for lexigraph operations.
pub type Result<T> = std::result::Result<T, Error>;
