//! Looking up a field node by fully-qualified name.

use std::collections::HashSet;

use crate::{FieldTree, MAX_FIELD_DEPTH, qualified_name};

/// Find the first node under `roots` whose fully-qualified name is `name`.
///
/// Uses the same last-pushed-first work list as
/// [`apply_values`](crate::apply_values). Non-terminal nodes can match, so a
/// checkbox group is found by its own name. Walks are bounded the same way
/// as enumeration.
pub fn find_field<T: FieldTree + ?Sized>(tree: &T, roots: &[T::Node], name: &str) -> Option<T::Node> {
    let mut seen = HashSet::new();
    let mut stack: Vec<(Vec<T::Node>, String, usize)> = vec![(roots.to_vec(), String::new(), 0)];
    while let Some((nodes, prefix, depth)) = stack.pop() {
        for node in nodes {
            if !seen.insert(node) {
                continue;
            }
            let full = qualified_name(&prefix, tree.partial_name(node).as_deref());
            if full == name {
                return Some(node);
            }
            let kids = tree.kids(node);
            if !kids.is_empty() && depth + 1 < MAX_FIELD_DEPTH {
                stack.push((kids, full, depth + 1));
            }
        }
    }
    None
}
