//! Error type for the form facade.

use std::path::PathBuf;

use formfill_parse::BackendError;
use thiserror::Error;

/// Fatal errors from listing, filling, or inspecting a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// The form identifier does not resolve to an existing file.
    #[error("form not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// The document lacks structure the operation requires.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// No field has the requested fully-qualified name.
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// The PDF could not be parsed or saved.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The form file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    pub(crate) fn no_acroform() -> Self {
        Self::MalformedDocument("PDF has no AcroForm".to_string())
    }
}
