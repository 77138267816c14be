//! PDF name symbols and field values.
//!
//! Field types, appearance-dictionary keys, and appearance-state names are
//! all PDF name objects. [`Name`] keeps their raw bytes so that a state name
//! read from an appearance dictionary is written back byte-for-byte.

use std::fmt;

/// A PDF name object (`/Yes`, `/Off`, `/Tx`), stored without its leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Vec<u8>);

impl Name {
    /// The unchecked appearance state shared by every checkbox and radio button.
    pub const OFF: &'static str = "Off";
    /// The checked state assumed when a field's appearance says nothing better.
    pub const YES: &'static str = "Yes";

    /// Create a name from text. A leading `/` is stripped if present.
    pub fn new(name: &str) -> Self {
        Self::from_bytes(name.strip_prefix('/').unwrap_or(name).as_bytes())
    }

    /// Create a name from the raw bytes stored in the document.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// The `Off` sentinel.
    pub fn off() -> Self {
        Self::new(Self::OFF)
    }

    /// The default on-value, `Yes`.
    pub fn yes() -> Self {
        Self::new(Self::YES)
    }

    /// Whether this is the `Off` sentinel.
    pub fn is_off(&self) -> bool {
        self.0 == Self::OFF.as_bytes()
    }

    /// Raw name bytes, without the leading `/`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The name as text, without the leading `/`. Invalid UTF-8 is replaced.
    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.as_str_lossy())
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The current value (`/V`) of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A name value, as used by checkboxes and radio buttons.
    Name(Name),
    /// A text string value, as used by text and choice fields.
    Text(String),
    /// Any other object, rendered for display only.
    Other(String),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The name, if this is a name value.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Text(text) | Self::Other(text) => f.write_str(text),
        }
    }
}

impl From<Name> for FieldValue {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_leading_slash() {
        assert_eq!(Name::new("/Yes"), Name::new("Yes"));
        assert_eq!(Name::new("/Yes").as_bytes(), b"Yes");
    }

    #[test]
    fn name_display_has_slash() {
        assert_eq!(Name::new("Tx").to_string(), "/Tx");
    }

    #[test]
    fn off_sentinel() {
        assert!(Name::off().is_off());
        assert!(Name::new("/Off").is_off());
        assert!(!Name::yes().is_off());
        // State names are case sensitive.
        assert!(!Name::new("OFF").is_off());
    }

    #[test]
    fn name_keeps_non_utf8_bytes() {
        let name = Name::from_bytes(&[0x4A, 0xE4]);
        assert_eq!(name.as_bytes(), &[0x4A, 0xE4]);
        assert_eq!(name.to_string(), "/J\u{FFFD}");
    }

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Name(Name::yes()).to_string(), "/Yes");
        assert_eq!(FieldValue::text("Jane").to_string(), "Jane");
    }

    #[test]
    fn field_value_accessors() {
        let value = FieldValue::from(Name::new("Y"));
        assert_eq!(value.as_name(), Some(&Name::new("Y")));
        assert!(value.as_text().is_none());
        assert_eq!(FieldValue::text("x").as_text(), Some("x"));
    }
}
