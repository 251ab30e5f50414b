//! Error types for TokenLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.
//!
//! Network and authentication failures during token resolution are deliberately
//! NOT part of this taxonomy: they are recovered locally and surfaced as invalid
//! analysis results so one bad token never aborts a scan.

use thiserror::Error;

/// Main error type for TokenLens
#[derive(Error, Debug)]
pub enum TokenLensError {
    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Output rendering errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that occur while acquiring the text to scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read the input file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors that occur while writing a report
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the report to a file
    #[error("Failed to write report to '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
