//! formfill-parse: lopdf backend for AcroForm field trees.
//!
//! This crate reads a PDF with lopdf and exposes its `/AcroForm` field
//! hierarchy through the [`formfill_core::FieldTree`] and
//! [`formfill_core::FieldTreeMut`] traits, so the core algorithms can
//! enumerate and fill it. It depends on formfill-core for shared types.

pub mod error;
pub mod lopdf_backend;
pub mod text_string;

pub use error::BackendError;
pub use formfill_core;
pub use lopdf_backend::LopdfForm;
pub use text_string::{decode_pdf_string, encode_pdf_string};
