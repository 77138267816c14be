//! formfill-core: Backend-independent AcroForm field tree algorithms.
//!
//! This crate provides the field-tree node contract ([`FieldTree`],
//! [`FieldTreeMut`]), an in-memory tree ([`FieldArena`]), and the algorithms
//! that run over any implementation of it:
//!
//! - [`enumerate_fields`]: flat `{name, type}` list of terminal fields
//! - [`apply_values`]: write text and checkbox values in place
//! - [`resolve_on_value`]: discover a checkbox's checked-state name
//! - [`inspect_field`]: diagnostic dump of a field and its kids
//! - [`find_field`]: look up a node by fully-qualified name
//!
//! It does not depend on any PDF library.

pub mod appearance;
pub mod apply;
pub mod arena;
pub mod enumerate;
pub mod form_field;
pub mod inspect;
pub mod locate;
pub mod name;
pub mod on_value;
pub mod tree;

pub use appearance::{AppearanceDict, AppearanceEntry};
pub use apply::{FillValues, apply_values};
pub use arena::{FieldArena, FieldNode, NodeId};
pub use enumerate::enumerate_fields;
pub use form_field::{FieldRecord, FieldType};
pub use inspect::{AppearanceSummary, FieldInspection, inspect_field};
pub use locate::find_field;
pub use name::{FieldValue, Name};
pub use on_value::resolve_on_value;
pub use tree::{FieldTree, FieldTreeMut, MAX_FIELD_DEPTH, qualified_name};
