//! Resolution of form identifiers to PDF files.

use std::path::{Path, PathBuf};

use formfill_core::FieldRecord;
use tracing::debug;

use crate::{FieldDebug, FillRequest, Form, FormError};

/// Directory searched for `<slug>.pdf` when no other is configured.
pub const DEFAULT_FORMS_DIR: &str = "Forms";

/// A filled form ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledDocument {
    /// Suggested file name, `<slug>-filled.pdf`.
    pub filename: String,
    /// The serialized PDF.
    pub bytes: Vec<u8>,
}

/// A directory of blank forms addressed by slug.
///
/// A slug such as `i-130` resolves to `<forms_dir>/i-130.pdf` and never to
/// anything outside `forms_dir`. Callers that accept file paths open them
/// with [`Form::open_file`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLibrary {
    forms_dir: PathBuf,
}

impl Default for FormLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_FORMS_DIR)
    }
}

impl FormLibrary {
    /// Create a library rooted at `forms_dir`.
    pub fn new(forms_dir: impl Into<PathBuf>) -> Self {
        Self {
            forms_dir: forms_dir.into(),
        }
    }

    /// The directory slugs are resolved against.
    pub fn forms_dir(&self) -> &Path {
        &self.forms_dir
    }

    /// Resolve a slug to `<forms_dir>/<slug>.pdf`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ResourceNotFound`] if the file does not exist or
    /// the slug is empty or contains a path separator or `..`.
    pub fn locate(&self, form: &str) -> Result<PathBuf, FormError> {
        if form.is_empty() || form.contains(['/', '\\']) || form.contains("..") {
            return Err(FormError::ResourceNotFound(PathBuf::from(form)));
        }
        let path = self.forms_dir.join(format!("{form}.pdf"));
        if !path.is_file() {
            return Err(FormError::ResourceNotFound(path));
        }
        debug!(form, path = %path.display(), "resolved form");
        Ok(path)
    }

    /// Open the identified form.
    ///
    /// # Errors
    ///
    /// As [`FormLibrary::locate`] and [`Form::open_file`].
    pub fn open(&self, form: &str) -> Result<Form, FormError> {
        Form::open_file(self.locate(form)?)
    }

    /// List the terminal fields of a form. Empty if it has no AcroForm.
    ///
    /// # Errors
    ///
    /// As [`FormLibrary::open`].
    pub fn list_fields(&self, form: &str) -> Result<Vec<FieldRecord>, FormError> {
        Ok(self.open(form)?.fields())
    }

    /// Fill a form and name the result after its slug.
    ///
    /// # Errors
    ///
    /// As [`FormLibrary::open`] and [`Form::fill`].
    pub fn fill(&self, form: &str, request: &FillRequest) -> Result<FilledDocument, FormError> {
        let bytes = self.open(form)?.fill(&request.into())?;
        Ok(FilledDocument {
            filename: filled_filename(form),
            bytes,
        })
    }

    /// Inspect one field of a form.
    ///
    /// # Errors
    ///
    /// As [`FormLibrary::open`] and [`Form::inspect_field`].
    pub fn inspect_field(&self, form: &str, name: &str) -> Result<FieldDebug, FormError> {
        self.open(form)?.inspect_field(name)
    }
}

/// Whether a form identifier names a PDF file rather than a slug.
pub fn is_pdf_path(form: &str) -> bool {
    Path::new(form)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// The slug of a form identifier: the identifier itself, or a path's stem.
pub fn form_slug(form: &str) -> String {
    if is_pdf_path(form) {
        if let Some(stem) = Path::new(form).file_stem() {
            return stem.to_string_lossy().into_owned();
        }
    }
    form.to_string()
}

/// `<slug>-filled.pdf`.
pub fn filled_filename(form: &str) -> String {
    format!("{}-filled.pdf", form_slug(form))
}
