//! # Error Types
//!
//! This module defines error types used throughout the labelgen library.
//!
//! The barcode engine itself never fails (invalid input draws nothing);
//! these errors cover loading inputs and writing the PDF.

use thiserror::Error;

/// Main error type for labelgen operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Malformed CSV input
    #[error("CSV error (line {line}): {message}")]
    Csv { line: usize, message: String },

    /// Structurally invalid layout configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Layout JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PDF assembly error (fonts, pages)
    #[error("PDF error: {0}")]
    Pdf(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LabelError>;
