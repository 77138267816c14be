//! Diagnostic dumps of field nodes.
//!
//! [`inspect_field`] reports everything needed to work out how a form
//! encodes a field: its type, value, appearance state, flags, raw keys, the
//! appearance dictionaries of the node and its parent, and the same report
//! for every kid. It never writes to the tree.

use std::collections::HashSet;

use crate::{AppearanceDict, FieldTree, MAX_FIELD_DEPTH, Name};

/// Summary of one appearance dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AppearanceSummary {
    /// Appearance kinds present (`/N`, `/D`, ...), in stored order.
    pub kinds: Vec<String>,
    /// Object kind of the `/N` entry (`dictionary`, `stream`, ...).
    pub normal: Option<String>,
    /// Object kind of the `/D` entry.
    pub down: Option<String>,
    /// State names, taken from `/N` first, then `/D`.
    pub states: Vec<String>,
}

impl AppearanceSummary {
    fn of(ap: &AppearanceDict) -> Self {
        Self {
            kinds: to_strings(&ap.kinds),
            normal: ap.normal.as_ref().map(|entry| entry.kind().to_string()),
            down: ap.down.as_ref().map(|entry| entry.kind().to_string()),
            states: to_strings(&ap.display_states()),
        }
    }
}

/// Observable state of one field node and, recursively, its kids.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldInspection {
    /// Declared `/FT`, e.g. `/Btn`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub field_type: Option<String>,
    /// Current `/V`.
    pub value: Option<String>,
    /// Current `/AS`.
    pub appearance_state: Option<String>,
    /// `/Ff` flag bits.
    pub flags: Option<i64>,
    /// Keys of the node's own dictionary.
    pub keys: Vec<String>,
    /// The node's own `/AP`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub appearance: Option<AppearanceSummary>,
    /// Keys of the parent's dictionary, if the node has a parent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub parent_keys: Option<Vec<String>>,
    /// The parent's `/AP`, if it has one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub parent_appearance: Option<AppearanceSummary>,
    /// The same inspection for every kid.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub kids: Vec<FieldInspection>,
}

/// Inspect `node` and all of its descendants.
///
/// Kids already reported, or nested deeper than
/// [`MAX_FIELD_DEPTH`] below `node`, are left out.
pub fn inspect_field<T: FieldTree + ?Sized>(tree: &T, node: T::Node) -> FieldInspection {
    let mut seen = HashSet::from([node]);
    inspect_node(tree, node, 0, &mut seen)
}

fn inspect_node<T: FieldTree + ?Sized>(
    tree: &T,
    node: T::Node,
    depth: usize,
    seen: &mut HashSet<T::Node>,
) -> FieldInspection {
    let parent = tree.parent(node);
    let mut kids = Vec::new();
    if depth + 1 < MAX_FIELD_DEPTH {
        for kid in tree.kids(node) {
            if seen.insert(kid) {
                kids.push(inspect_node(tree, kid, depth + 1, seen));
            }
        }
    }
    FieldInspection {
        field_type: tree.field_type(node).map(|t| t.to_string()),
        value: tree.value(node).map(|v| v.to_string()),
        appearance_state: tree.appearance_state(node).map(|s| s.to_string()),
        flags: tree.flags(node),
        keys: to_strings(&tree.keys(node)),
        appearance: tree.appearance(node).as_ref().map(AppearanceSummary::of),
        parent_keys: parent.map(|p| to_strings(&tree.keys(p))),
        parent_appearance: parent
            .and_then(|p| tree.appearance(p))
            .as_ref()
            .map(AppearanceSummary::of),
        kids,
    }
}

fn to_strings(names: &[Name]) -> Vec<String> {
    names.iter().map(Name::to_string).collect()
}
