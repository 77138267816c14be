//! Error types for the lopdf backend.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Error type for PDF loading and saving.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the document.
    #[error("PDF write error: {0}")]
    Write(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,
}
