//! lopdf-based field tree backend.
//!
//! Implements [`FieldTree`] and [`FieldTreeMut`] over a
//! [lopdf](https://crates.io/crates/lopdf) document. Field nodes are
//! addressed by their [`ObjectId`]; every `/Kids`, `/Parent`, and `/AP`
//! lookup dereferences indirect objects first.

use formfill_core::{
    AppearanceDict, AppearanceEntry, FieldTree, FieldTreeMut, FieldValue, Name,
};
use lopdf::{Dictionary, Object, ObjectId};
use tracing::{debug, warn};

use crate::error::BackendError;
use crate::text_string::{decode_pdf_string, encode_pdf_string};

/// A parsed PDF document viewed as an AcroForm field tree.
pub struct LopdfForm {
    /// The underlying lopdf document.
    inner: lopdf::Document,
}

impl LopdfForm {
    /// Parse PDF bytes.
    ///
    /// Encrypted documents are decrypted with the empty user password, which
    /// is how most fillable government forms are distributed. The owner
    /// password is never needed. Saved output is not re-encrypted.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] if the bytes are not a PDF, or
    /// [`BackendError::PasswordRequired`] if the empty password is rejected.
    pub fn load_mem(bytes: &[u8]) -> Result<Self, BackendError> {
        let mut inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;

        // lopdf tries the empty password while loading and only leaves
        // /Encrypt in the trailer when that fails.
        if inner.is_encrypted() {
            inner.decrypt("").map_err(|e| {
                debug!(error = %e, "empty-password decryption failed");
                BackendError::PasswordRequired
            })?;
        }
        if inner.was_encrypted() {
            debug!("decrypted with the empty user password");
        }

        Ok(Self { inner })
    }

    /// Read and parse a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Io`] if the file cannot be read, otherwise as
    /// [`LopdfForm::load_mem`].
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, BackendError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::load_mem(&bytes)
    }

    /// Wrap an already-parsed lopdf document.
    pub fn from_document(inner: lopdf::Document) -> Self {
        Self { inner }
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }

    /// Whether the document catalog has an `/AcroForm` dictionary.
    pub fn has_acroform(&self) -> bool {
        self.acroform().is_some()
    }

    /// The top-level fields listed in `/AcroForm /Fields`.
    ///
    /// Returns an empty list when the document has no AcroForm.
    pub fn root_fields(&self) -> Vec<ObjectId> {
        self.acroform()
            .and_then(|acroform| acroform.get(b"Fields").ok())
            .map(|fields| references(&self.inner, fields, "/Fields"))
            .unwrap_or_default()
    }

    /// Set `/NeedAppearances true` on the AcroForm so viewers regenerate
    /// field appearances from the new values.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] if the document has no AcroForm.
    pub fn set_need_appearances(&mut self) -> Result<(), BackendError> {
        let acroform = self
            .acroform_mut()
            .ok_or_else(|| BackendError::Parse("document has no /AcroForm".to_string()))?;
        acroform.set("NeedAppearances", Object::Boolean(true));
        Ok(())
    }

    /// Serialize the document.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Write`] if lopdf fails to write the document.
    pub fn save_to_vec(&mut self) -> Result<Vec<u8>, BackendError> {
        let mut buf = Vec::new();
        self.inner
            .save_to(&mut buf)
            .map_err(|e| BackendError::Write(format!("failed to save PDF: {e}")))?;
        Ok(buf)
    }

    fn catalog(&self) -> Option<&Dictionary> {
        let root = self.inner.trailer.get(b"Root").ok()?;
        resolve_ref(&self.inner, root).as_dict().ok()
    }

    fn acroform(&self) -> Option<&Dictionary> {
        let acroform = self.catalog()?.get(b"AcroForm").ok()?;
        resolve_ref(&self.inner, acroform).as_dict().ok()
    }

    fn acroform_mut(&mut self) -> Option<&mut Dictionary> {
        let root_id = match self.inner.trailer.get(b"Root").ok()? {
            Object::Reference(id) => Some(*id),
            _ => None,
        };
        let acroform_id = match self.catalog()?.get(b"AcroForm").ok()? {
            Object::Reference(id) => Some(*id),
            _ => None,
        };

        if let Some(id) = acroform_id {
            return self.inner.get_object_mut(id).ok()?.as_dict_mut().ok();
        }
        let catalog = match root_id {
            Some(id) => self.inner.get_object_mut(id).ok()?,
            None => self.inner.trailer.get_mut(b"Root").ok()?,
        };
        catalog
            .as_dict_mut()
            .ok()?
            .get_mut(b"AcroForm")
            .ok()?
            .as_dict_mut()
            .ok()
    }

    fn dict(&self, id: ObjectId) -> Option<&Dictionary> {
        self.inner.get_object(id).ok()?.as_dict().ok()
    }

    fn entry(&self, id: ObjectId, key: &[u8]) -> Option<&Object> {
        let obj = self.dict(id)?.get(key).ok()?;
        Some(resolve_ref(&self.inner, obj))
    }

    fn set_entry(&mut self, id: ObjectId, key: &str, value: Object) {
        match self
            .inner
            .get_object_mut(id)
            .and_then(|obj| obj.as_dict_mut())
        {
            Ok(dict) => {
                dict.set(key, value);
            }
            Err(e) => warn!(object = ?id, key, error = %e, "cannot write to non-dictionary field"),
        }
    }

    fn appearance_entry(&self, obj: &Object) -> AppearanceEntry {
        match resolve_ref(&self.inner, obj) {
            Object::Dictionary(dict) => AppearanceEntry::States(dict_keys(dict)),
            Object::Stream(_) => AppearanceEntry::Stream,
            other => AppearanceEntry::Other(object_kind(other).to_string()),
        }
    }
}

impl std::fmt::Debug for LopdfForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfForm")
            .field("object_count", &self.inner.objects.len())
            .finish_non_exhaustive()
    }
}

impl FieldTree for LopdfForm {
    type Node = ObjectId;

    fn partial_name(&self, node: ObjectId) -> Option<String> {
        match self.entry(node, b"T")? {
            Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
            _ => None,
        }
    }

    fn field_type(&self, node: ObjectId) -> Option<Name> {
        match self.entry(node, b"FT")? {
            Object::Name(name) => Some(Name::from_bytes(name)),
            _ => None,
        }
    }

    fn kids(&self, node: ObjectId) -> Vec<ObjectId> {
        self.dict(node)
            .and_then(|dict| dict.get(b"Kids").ok())
            .map(|kids| references(&self.inner, kids, "/Kids"))
            .unwrap_or_default()
    }

    fn parent(&self, node: ObjectId) -> Option<ObjectId> {
        match self.dict(node)?.get(b"Parent").ok()? {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }

    fn value(&self, node: ObjectId) -> Option<FieldValue> {
        let value = match self.entry(node, b"V")? {
            Object::Name(name) => FieldValue::Name(Name::from_bytes(name)),
            Object::String(bytes, _) => FieldValue::Text(decode_pdf_string(bytes)),
            // Multi-select choice fields hold an array of strings.
            Object::Array(items) => FieldValue::Other(
                items
                    .iter()
                    .filter_map(|item| match resolve_ref(&self.inner, item) {
                        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
                        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Object::Integer(n) => FieldValue::Other(n.to_string()),
            Object::Real(n) => FieldValue::Other(n.to_string()),
            Object::Boolean(b) => FieldValue::Other(b.to_string()),
            other => FieldValue::Other(object_kind(other).to_string()),
        };
        Some(value)
    }

    fn appearance_state(&self, node: ObjectId) -> Option<Name> {
        match self.entry(node, b"AS")? {
            Object::Name(name) => Some(Name::from_bytes(name)),
            _ => None,
        }
    }

    fn appearance(&self, node: ObjectId) -> Option<AppearanceDict> {
        let ap = self.entry(node, b"AP")?.as_dict().ok()?;
        if ap.is_empty() {
            return None;
        }
        Some(AppearanceDict {
            kinds: dict_keys(ap),
            normal: ap.get(b"N").ok().map(|obj| self.appearance_entry(obj)),
            down: ap.get(b"D").ok().map(|obj| self.appearance_entry(obj)),
        })
    }

    fn flags(&self, node: ObjectId) -> Option<i64> {
        match self.entry(node, b"Ff")? {
            Object::Integer(n) => Some(*n),
            _ => None,
        }
    }

    fn keys(&self, node: ObjectId) -> Vec<Name> {
        self.dict(node).map(dict_keys).unwrap_or_default()
    }
}

impl FieldTreeMut for LopdfForm {
    fn set_value(&mut self, node: ObjectId, value: FieldValue) {
        let obj = match value {
            FieldValue::Name(name) => Object::Name(name.as_bytes().to_vec()),
            FieldValue::Text(text) | FieldValue::Other(text) => encode_pdf_string(&text),
        };
        self.set_entry(node, "V", obj);
    }

    fn set_appearance_state(&mut self, node: ObjectId, state: Name) {
        self.set_entry(node, "AS", Object::Name(state.as_bytes().to_vec()));
    }
}

/// Dereference an indirect object; direct objects are returned unchanged.
///
/// A dangling reference resolves to the reference itself, which callers
/// treat as "wrong type".
fn resolve_ref<'a>(doc: &'a lopdf::Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Collect the object references in a (possibly indirect) array.
///
/// Field dictionaries must be indirect objects to be addressable; direct
/// entries are skipped.
fn references(doc: &lopdf::Document, obj: &Object, owner: &str) -> Vec<ObjectId> {
    let Ok(items) = resolve_ref(doc, obj).as_array() else {
        warn!(owner, "expected an array of field references");
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Object::Reference(id) => Some(*id),
            other => {
                debug!(owner, kind = object_kind(other), "skipping direct field object");
                None
            }
        })
        .collect()
}

fn dict_keys(dict: &Dictionary) -> Vec<Name> {
    dict.iter().map(|(key, _)| Name::from_bytes(key)).collect()
}

fn object_kind(obj: &Object) -> &'static str {
    match obj {
        Object::Null => "null",
        Object::Boolean(_) => "boolean",
        Object::Integer(_) => "integer",
        Object::Real(_) => "real",
        Object::Name(_) => "name",
        Object::String(..) => "string",
        Object::Array(_) => "array",
        Object::Dictionary(_) => "dictionary",
        Object::Stream(_) => "stream",
        Object::Reference(_) => "reference",
    }
}
