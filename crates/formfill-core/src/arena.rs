//! In-memory field tree.
//!
//! [`FieldArena`] owns every [`FieldNode`] in a flat `Vec`; kids and parents
//! refer to each other by [`NodeId`] index, so the parent/kids cycle never
//! becomes an ownership cycle.

use crate::{AppearanceDict, FieldTree, FieldTreeMut, FieldValue, Name};

/// Index of a node in a [`FieldArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One field dictionary held by a [`FieldArena`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldNode {
    /// `/T`
    pub partial_name: Option<String>,
    /// `/FT`
    pub field_type: Option<Name>,
    /// `/V`
    pub value: Option<FieldValue>,
    /// `/AS`
    pub appearance_state: Option<Name>,
    /// `/AP`
    pub appearance: Option<AppearanceDict>,
    /// `/Ff`
    pub flags: Option<i64>,
    kids: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl FieldNode {
    /// Create a node with the given partial name.
    pub fn named(partial_name: &str) -> Self {
        Self {
            partial_name: Some(partial_name.to_string()),
            ..Self::default()
        }
    }

    /// Create a node with no partial name (a bare widget).
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the declared field type.
    pub fn with_type(mut self, field_type: &str) -> Self {
        self.field_type = Some(Name::new(field_type));
        self
    }

    /// Set the current value.
    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the appearance state.
    pub fn with_state(mut self, state: &str) -> Self {
        self.appearance_state = Some(Name::new(state));
        self
    }

    /// Set the appearance dictionary.
    pub fn with_appearance(mut self, appearance: AppearanceDict) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Set the field flags.
    pub fn with_flags(mut self, flags: i64) -> Self {
        self.flags = Some(flags);
        self
    }

    /// The node's kids.
    pub fn kids(&self) -> &[NodeId] {
        &self.kids
    }

    /// The node's parent.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An arena of field nodes with an ordered list of root fields.
///
/// # Example
///
/// ```
/// use formfill_core::{FieldArena, FieldNode};
///
/// let mut arena = FieldArena::new();
/// let form = arena.add_root(FieldNode::named("form1"));
/// let name = arena.add_kid(form, FieldNode::named("name").with_type("Tx"));
/// assert_eq!(arena.node(name).parent(), Some(form));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldArena {
    nodes: Vec<FieldNode>,
    roots: Vec<NodeId>,
}

impl FieldArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level field (an entry of the AcroForm `/Fields` array).
    pub fn add_root(&mut self, node: FieldNode) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    /// Add a kid under `parent`, linking both directions.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn add_kid(&mut self, parent: NodeId, node: FieldNode) -> NodeId {
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].kids.push(id);
        id
    }

    fn push(&mut self, mut node: FieldNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.kids.clear();
        node.parent = parent;
        self.nodes.push(node);
        id
    }

    /// The top-level fields, in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn node(&self, id: NodeId) -> &FieldNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FieldTree for FieldArena {
    type Node = NodeId;

    fn partial_name(&self, node: NodeId) -> Option<String> {
        self.node(node).partial_name.clone()
    }

    fn field_type(&self, node: NodeId) -> Option<Name> {
        self.node(node).field_type.clone()
    }

    fn kids(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).kids.clone()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn value(&self, node: NodeId) -> Option<FieldValue> {
        self.node(node).value.clone()
    }

    fn appearance_state(&self, node: NodeId) -> Option<Name> {
        self.node(node).appearance_state.clone()
    }

    fn appearance(&self, node: NodeId) -> Option<AppearanceDict> {
        self.node(node)
            .appearance
            .clone()
            .filter(|ap| !ap.is_empty())
    }

    fn flags(&self, node: NodeId) -> Option<i64> {
        self.node(node).flags
    }

    fn keys(&self, node: NodeId) -> Vec<Name> {
        let n = self.node(node);
        [
            ("T", n.partial_name.is_some()),
            ("FT", n.field_type.is_some()),
            ("Kids", !n.kids.is_empty()),
            ("Parent", n.parent.is_some()),
            ("V", n.value.is_some()),
            ("AS", n.appearance_state.is_some()),
            ("AP", n.appearance.is_some()),
            ("Ff", n.flags.is_some()),
        ]
        .into_iter()
        .filter(|&(_, present)| present)
        .map(|(key, _)| Name::new(key))
        .collect()
    }
}

impl FieldTreeMut for FieldArena {
    fn set_value(&mut self, node: NodeId, value: FieldValue) {
        self.nodes[node.0].value = Some(value);
    }

    fn set_appearance_state(&mut self, node: NodeId, state: Name) {
        self.nodes[node.0].appearance_state = Some(state);
    }
}
