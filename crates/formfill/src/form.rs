//! A single opened PDF form.

use formfill_core::{
    FieldInspection, FieldRecord, FillValues, apply_values, enumerate_fields, find_field,
    inspect_field,
};
use formfill_parse::LopdfForm;
use serde::Serialize;
use tracing::info;

use crate::FormError;

/// Result of a field lookup: the requested name and its inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDebug {
    /// The fully-qualified name that was looked up.
    pub name: String,
    /// Observable state of the matched node and its kids.
    pub info: FieldInspection,
}

/// An opened PDF document with an AcroForm field tree.
///
/// # Example
///
/// ```ignore
/// let mut form = Form::open_file("Forms/i-130.pdf")?;
/// for field in form.fields() {
///     println!("{} {}", field.name, field.field_type);
/// }
/// let bytes = form.fill(&FillValues::new().with_text("form1.Name", "Jane"))?;
/// ```
#[derive(Debug)]
pub struct Form {
    doc: LopdfForm,
}

impl Form {
    /// Open a form from PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Backend`] if the bytes are not a readable PDF.
    pub fn open(bytes: &[u8]) -> Result<Self, FormError> {
        Ok(Self {
            doc: LopdfForm::load_mem(bytes)?,
        })
    }

    /// Open a form from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Io`] if the file cannot be read, otherwise as
    /// [`Form::open`].
    pub fn open_file(path: impl AsRef<std::path::Path>) -> Result<Self, FormError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::open(&bytes)
    }

    /// Whether the document has an AcroForm.
    pub fn has_acroform(&self) -> bool {
        self.doc.has_acroform()
    }

    /// Every terminal field, in document order. Empty without an AcroForm.
    pub fn fields(&self) -> Vec<FieldRecord> {
        enumerate_fields(&self.doc, &self.doc.root_fields())
    }

    /// Write `values` into the form and serialize the result.
    ///
    /// Sets `/NeedAppearances true` so viewers redraw filled fields. Names
    /// that match no field are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedDocument`] if the document has no
    /// AcroForm, or [`FormError::Backend`] if it cannot be saved.
    pub fn fill(&mut self, values: &FillValues) -> Result<Vec<u8>, FormError> {
        if !self.doc.has_acroform() {
            return Err(FormError::no_acroform());
        }
        self.doc.set_need_appearances()?;
        let roots = self.doc.root_fields();
        apply_values(&mut self.doc, &roots, values);
        info!(
            text = values.text.len(),
            checkboxes = values.checkboxes.len(),
            "applied form values"
        );
        Ok(self.doc.save_to_vec()?)
    }

    /// Inspect the first field whose fully-qualified name is `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedDocument`] if the document has no
    /// AcroForm, or [`FormError::FieldNotFound`] if no node has that name.
    pub fn inspect_field(&self, name: &str) -> Result<FieldDebug, FormError> {
        if !self.doc.has_acroform() {
            return Err(FormError::no_acroform());
        }
        let node = find_field(&self.doc, &self.doc.root_fields(), name)
            .ok_or_else(|| FormError::FieldNotFound(name.to_string()))?;
        Ok(FieldDebug {
            name: name.to_string(),
            info: inspect_field(&self.doc, node),
        })
    }

    /// Access the lopdf backend.
    pub fn backend(&self) -> &LopdfForm {
        &self.doc
    }
}
