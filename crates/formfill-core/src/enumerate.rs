//! Field enumeration.
//!
//! Walks the field tree depth-first in stored order and reports every
//! terminal field. Checkbox groups are not special-cased here: a node with
//! kids is always descended into, even if a fill would address it directly.

use std::collections::HashSet;

use tracing::warn;

use crate::{FieldRecord, FieldTree, MAX_FIELD_DEPTH, qualified_name};

/// List every terminal field under `roots` as a `{name, type}` record.
///
/// Returns an empty list for an empty `roots` (a document without an
/// AcroForm). Field types are passed through unfiltered; undeclared types
/// are reported as the empty string. A node reached a second time through a
/// cyclic `/Kids` graph, or nested deeper than [`MAX_FIELD_DEPTH`], is
/// skipped.
pub fn enumerate_fields<T: FieldTree + ?Sized>(tree: &T, roots: &[T::Node]) -> Vec<FieldRecord> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    walk(tree, roots, "", 0, &mut seen, &mut records);
    records
}

fn walk<T: FieldTree + ?Sized>(
    tree: &T,
    nodes: &[T::Node],
    prefix: &str,
    depth: usize,
    seen: &mut HashSet<T::Node>,
    records: &mut Vec<FieldRecord>,
) {
    if depth >= MAX_FIELD_DEPTH {
        warn!(prefix, "field tree nested too deeply; skipping kids");
        return;
    }
    for &node in nodes {
        if !seen.insert(node) {
            warn!(?node, "field reached twice; skipping");
            continue;
        }
        let name = qualified_name(prefix, tree.partial_name(node).as_deref());
        let kids = tree.kids(node);
        if kids.is_empty() {
            records.push(FieldRecord::new(name, tree.field_type(node).as_ref()));
        } else {
            walk(tree, &kids, &name, depth + 1, seen, records);
        }
    }
}
