//! Error types for line enumeration, encoding and emission.

use super::config::BoardConfig;
use thiserror::Error;

/// Errors that can occur while enumerating, encoding or emitting lines.
#[derive(Debug, Error)]
pub enum LineError {
    /// The board (or the chosen cell encoding) cannot be used.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of what's wrong with the configuration
        message: String,
    },

    /// A cell (or the packed code of one) is not on the board.
    #[error("Invalid cell: {cell} is outside a {dimensions}-dimensional board of side {side}")]
    InvalidCell {
        /// The coordinate, or `code N` when decoding
        cell: String,
        dimensions: usize,
        side: usize,
    },

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an InvalidCell error.
    pub fn invalid_cell(cell: impl Into<String>, config: &BoardConfig) -> Self {
        Self::InvalidCell {
            cell: cell.into(),
            dimensions: config.dimensions(),
            side: config.side(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineError>;
