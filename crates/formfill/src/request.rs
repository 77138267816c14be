//! Fill request payload.

use std::collections::HashMap;

use formfill_core::FillValues;
use serde::{Deserialize, Serialize};

/// Values to write into a form, keyed by fully-qualified field name.
///
/// Both maps default to empty when absent from the JSON payload:
///
/// ```
/// let req: formfill::FillRequest =
///     serde_json::from_str(r#"{"checkboxes": {"form1.Agree": true}}"#).unwrap();
/// assert!(req.fields.is_empty());
/// assert_eq!(req.checkboxes.get("form1.Agree"), Some(&true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRequest {
    /// Text values.
    #[serde(default)]
    pub fields: HashMap<String, String>,
    /// Checkbox states.
    #[serde(default)]
    pub checkboxes: HashMap<String, bool>,
}

impl FillRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` into this request; entries in `other` win.
    pub fn merge(&mut self, other: FillRequest) {
        self.fields.extend(other.fields);
        self.checkboxes.extend(other.checkboxes);
    }

    /// Number of values in the request.
    pub fn len(&self) -> usize {
        self.fields.len() + self.checkboxes.len()
    }

    /// Whether the request carries no values.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.checkboxes.is_empty()
    }
}

impl From<FillRequest> for FillValues {
    fn from(req: FillRequest) -> Self {
        FillValues {
            text: req.fields,
            checkboxes: req.checkboxes,
        }
    }
}

impl From<&FillRequest> for FillValues {
    fn from(req: &FillRequest) -> Self {
        req.clone().into()
    }
}
