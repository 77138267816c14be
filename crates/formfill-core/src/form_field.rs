//! Form field types for AcroForm enumeration.
//!
//! Provides [`FieldRecord`], the flat `{name, type}` record produced for each
//! terminal field, and [`FieldType`] for interpreting the declared `/FT`.

use crate::Name;

/// The type of a PDF form field.
///
/// Corresponds to the `/FT` entry in a field dictionary (PDF 1.7 Table 220).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldType {
    /// Text field (`/FT /Tx`).
    Text,
    /// Button field (`/FT /Btn`): checkboxes, radio buttons, push buttons.
    Button,
    /// Choice field (`/FT /Ch`): dropdowns, list boxes.
    Choice,
    /// Signature field (`/FT /Sig`).
    Signature,
}

impl FieldType {
    /// Parse a field type from its PDF name string, with or without the
    /// leading `/`.
    ///
    /// Returns `None` if the string is not a recognized field type.
    pub fn from_pdf_name(name: &str) -> Option<Self> {
        match name.strip_prefix('/').unwrap_or(name) {
            "Tx" => Some(Self::Text),
            "Btn" => Some(Self::Button),
            "Ch" => Some(Self::Choice),
            "Sig" => Some(Self::Signature),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Button => write!(f, "Button"),
            Self::Choice => write!(f, "Choice"),
            Self::Signature => write!(f, "Signature"),
        }
    }
}

/// A terminal form field as reported by field enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldRecord {
    /// Fully-qualified field name: `/T` segments joined with `.`.
    pub name: String,
    /// Declared `/FT` rendered as a PDF name (`/Tx`), or empty if undeclared.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub field_type: String,
}

impl FieldRecord {
    /// Build a record from a name and an optional declared type.
    pub fn new(name: impl Into<String>, field_type: Option<&Name>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.map(Name::to_string).unwrap_or_default(),
        }
    }

    /// Interpret the declared type, if it is one of the standard kinds.
    pub fn kind(&self) -> Option<FieldType> {
        FieldType::from_pdf_name(&self.field_type)
    }
}
