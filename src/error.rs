//! Error types for color parsing.

use thiserror::Error;

/// Errors that can occur when deriving a color string.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Input matched none of the supported color formats.
    #[error("invalid color format: {0}")]
    UnrecognizedFormat(String),
}
