//! Writing caller-supplied values into a field tree.
//!
//! [`apply_values`] walks the tree with an explicit work list of
//! `(nodes, prefix)` pairs rather than recursion. The most recently pushed
//! kid list is processed first; nodes within one list keep stored order.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::{FieldTreeMut, FieldValue, MAX_FIELD_DEPTH, Name, qualified_name, resolve_on_value};

/// Leaf-name marker of the synthetic "yes" half of a yes/no question.
const SYNTHETIC_YES: &str = "_Yes[0]";
/// Leaf-name marker of the synthetic "no" half of a yes/no question.
const SYNTHETIC_NO: &str = "_No[0]";

/// Values to write, keyed by fully-qualified field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillValues {
    /// Text values, written to `/V` as-is.
    pub text: HashMap<String, String>,
    /// Checkbox values; `true` selects the field's on-state, `false` `Off`.
    pub checkboxes: HashMap<String, bool>,
}

impl FillValues {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text value.
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.insert(name.into(), value.into());
        self
    }

    /// Add a checkbox value.
    pub fn with_checkbox(mut self, name: impl Into<String>, checked: bool) -> Self {
        self.checkboxes.insert(name.into(), checked);
        self
    }

    /// Whether there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.checkboxes.is_empty()
    }
}

/// Write `values` into every matching field under `roots`.
///
/// Names in `values` that match no field are ignored, and fields not named
/// in `values` are left untouched. A node with kids whose own name is a
/// checkbox key is filled as a checkbox group and not descended into.
///
/// Each node is visited at most once and nesting stops at
/// [`MAX_FIELD_DEPTH`], so a cyclic `/Kids` graph still terminates.
pub fn apply_values<T: FieldTreeMut + ?Sized>(tree: &mut T, roots: &[T::Node], values: &FillValues) {
    let mut seen = HashSet::new();
    let mut stack: Vec<(Vec<T::Node>, String, usize)> = vec![(roots.to_vec(), String::new(), 0)];
    while let Some((nodes, prefix, depth)) = stack.pop() {
        for node in nodes {
            if !seen.insert(node) {
                warn!(?node, "field reached twice; skipping");
                continue;
            }
            let name = qualified_name(&prefix, tree.partial_name(node).as_deref());
            let kids = tree.kids(node);
            if kids.is_empty() {
                apply_leaf(tree, node, &name, values);
            } else if let Some(&checked) = values.checkboxes.get(&name) {
                apply_group(tree, node, &kids, checked);
                debug!(field = %name, checked, kids = kids.len(), "filled checkbox group");
            } else if depth + 1 < MAX_FIELD_DEPTH {
                stack.push((kids, name, depth + 1));
            } else {
                warn!(field = %name, "field tree nested too deeply; skipping kids");
            }
        }
    }
}

/// Set a checkbox group and all of its widgets to one state.
///
/// The on-state is discovered from the first widget; every widget then
/// shows the same state as the group's value.
fn apply_group<T: FieldTreeMut + ?Sized>(tree: &mut T, node: T::Node, kids: &[T::Node], checked: bool) {
    let on = kids
        .first()
        .map(|&kid| resolve_on_value(&*tree, kid))
        .unwrap_or_else(Name::yes);
    let target = if checked { on } else { Name::off() };
    tree.set_value(node, FieldValue::Name(target.clone()));
    for &kid in kids {
        tree.set_appearance_state(kid, target.clone());
    }
}

fn apply_leaf<T: FieldTreeMut + ?Sized>(tree: &mut T, node: T::Node, name: &str, values: &FillValues) {
    if let Some(text) = values.text.get(name) {
        tree.set_value(node, FieldValue::text(text.clone()));
        debug!(field = %name, "filled text field");
    }
    let Some(&checked) = values.checkboxes.get(name) else {
        return;
    };

    // Synthetic yes/no leaves carry fixed states; their appearance
    // dictionaries are not trusted.
    let target = if !checked {
        Name::off()
    } else if name.contains(SYNTHETIC_YES) {
        Name::new("Y")
    } else if name.contains(SYNTHETIC_NO) {
        Name::new("N")
    } else {
        resolve_on_value(&*tree, node)
    };
    debug!(field = %name, state = %target, "filled checkbox");

    tree.set_value(node, FieldValue::Name(target.clone()));
    tree.set_appearance_state(node, target.clone());

    let Some(parent) = tree.parent(node) else {
        return;
    };
    tree.set_value(parent, FieldValue::Name(target.clone()));
    for sibling in tree.kids(parent) {
        let state = if sibling == node {
            target.clone()
        } else {
            Name::off()
        };
        tree.set_appearance_state(sibling, state);
    }
}
