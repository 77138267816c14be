//! formfill: List, fill, and inspect PDF AcroForm fields.
//!
//! This is the public API facade crate. It re-exports types from
//! formfill-core and uses formfill-parse for PDF reading and writing.
//!
//! # Architecture
//!
//! - **formfill-core**: Backend-independent field tree contract and algorithms
//! - **formfill-parse**: lopdf implementation of the field tree
//! - **formfill** (this crate): [`Form`], [`FormLibrary`], and [`FillRequest`]
//!
//! # Example
//!
//! ```ignore
//! let library = FormLibrary::new("Forms");
//! let mut request = FillRequest::new();
//! request.fields.insert("form1.FamilyName".into(), "Doe".into());
//! request.checkboxes.insert("form1.Married".into(), true);
//! let filled = library.fill("i-130", &request)?;
//! std::fs::write(&filled.filename, &filled.bytes)?;
//! ```

mod error;
mod form;
mod library;
mod request;

#[cfg(test)]
mod test_fixtures;

pub use error::FormError;
pub use form::{FieldDebug, Form};
pub use formfill_core::{
    FieldInspection, FieldRecord, FieldType, FillValues, Name, apply_values, enumerate_fields,
};
pub use library::{
    DEFAULT_FORMS_DIR, FilledDocument, FormLibrary, filled_filename, form_slug, is_pdf_path,
};
pub use request::FillRequest;

pub use formfill_core;
pub use formfill_parse;
