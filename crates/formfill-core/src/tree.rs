//! Field tree access trait.
//!
//! Defines [`FieldTree`] and [`FieldTreeMut`], the node contract every field
//! algorithm in this crate is written against. A backend (the in-memory
//! [`FieldArena`](crate::FieldArena), or a PDF object graph) resolves
//! indirect references itself, so callers only ever see concrete nodes.

use std::fmt;
use std::hash::Hash;

use crate::{AppearanceDict, FieldValue, Name};

/// Read access to an AcroForm field tree.
///
/// # Associated Types
///
/// - `Node`: A cheap handle to one field dictionary. Handles are owned by the
///   tree; `parent` links are handles too, never ownership edges.
///
/// # Usage
///
/// ```ignore
/// for kid in tree.kids(node) {
///     let name = tree.partial_name(kid);
///     let state = tree.appearance_state(kid);
/// }
/// ```
pub trait FieldTree {
    /// A handle to one field node.
    type Node: Copy + Eq + Hash + fmt::Debug;

    /// The node's own name segment (`/T`).
    fn partial_name(&self, node: Self::Node) -> Option<String>;

    /// The declared field type (`/FT`).
    fn field_type(&self, node: Self::Node) -> Option<Name>;

    /// The node's kids (`/Kids`), dereferenced, in stored order.
    ///
    /// An absent or empty `/Kids` yields an empty list; both mean the node is
    /// terminal.
    fn kids(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The node's parent (`/Parent`), if any.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The field's current value (`/V`).
    fn value(&self, node: Self::Node) -> Option<FieldValue>;

    /// The selected appearance state (`/AS`).
    fn appearance_state(&self, node: Self::Node) -> Option<Name>;

    /// The appearance dictionary (`/AP`).
    ///
    /// Returns `None` when `/AP` is absent, empty, or not a dictionary.
    fn appearance(&self, node: Self::Node) -> Option<AppearanceDict>;

    /// The field flags (`/Ff`).
    fn flags(&self, node: Self::Node) -> Option<i64>;

    /// Every key present in the node's dictionary, in stored order.
    fn keys(&self, node: Self::Node) -> Vec<Name>;
}

/// Write access to an AcroForm field tree.
///
/// Only `/V` and `/AS` are ever written; nodes are never created or removed.
pub trait FieldTreeMut: FieldTree {
    /// Set the field's value (`/V`).
    fn set_value(&mut self, node: Self::Node, value: FieldValue);

    /// Set the selected appearance state (`/AS`).
    fn set_appearance_state(&mut self, node: Self::Node, state: Name);
}

/// Deepest `/Kids` nesting the tree walkers follow.
///
/// Together with visiting each node at most once, this bounds every walk
/// over a cyclic or pathologically deep `/Kids` graph.
pub const MAX_FIELD_DEPTH: usize = 64;

/// Join a name prefix and a partial name with `.`, skipping empty segments.
///
/// # Examples
///
/// ```
/// use formfill_core::qualified_name;
///
/// assert_eq!(qualified_name("form1.page1", Some("name")), "form1.page1.name");
/// assert_eq!(qualified_name("form1", None), "form1");
/// assert_eq!(qualified_name("", Some("name")), "name");
/// ```
pub fn qualified_name(prefix: &str, partial_name: Option<&str>) -> String {
    match partial_name.filter(|name| !name.is_empty()) {
        Some(name) if prefix.is_empty() => name.to_string(),
        Some(name) => format!("{prefix}.{name}"),
        None => prefix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_segments() {
        assert_eq!(qualified_name("A.B", Some("C")), "A.B.C");
    }

    #[test]
    fn qualified_name_at_root() {
        assert_eq!(qualified_name("", Some("A")), "A");
        assert_eq!(qualified_name("", None), "");
    }

    #[test]
    fn qualified_name_skips_empty_segment() {
        assert_eq!(qualified_name("A", Some("")), "A");
        assert_eq!(qualified_name("A", None), "A");
    }
}
