/*!
 * Error types for the sliderconv application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while rewriting slider markup
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Error when the source document cannot be read
    #[error("Failed to read source document: {0}")]
    SourceUnreadable(String),

    /// Error when the source bytes are not valid UTF-8
    #[error("Source document is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// Error when the destination cannot be written
    #[error("Failed to write destination document: {0}")]
    DestinationUnwritable(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from markup conversion
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::InvalidData {
            Self::Conversion(ConversionError::InvalidEncoding(error.to_string()))
        } else {
            Self::File(error.to_string())
        }
    }
}
