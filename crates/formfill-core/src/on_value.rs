//! Checked-state discovery for checkbox-like fields.

use crate::{FieldTree, Name};

/// Determine which appearance state means "checked" for `node`.
///
/// Uses the node's own appearance dictionary, or its parent's when the node
/// has none (widgets of a group often inherit it). Within that dictionary the
/// first non-`Off` state under `/D` wins, then under `/N`. Falls back to
/// `Yes`.
pub fn resolve_on_value<T: FieldTree + ?Sized>(tree: &T, node: T::Node) -> Name {
    tree.appearance(node)
        .or_else(|| tree.parent(node).and_then(|parent| tree.appearance(parent)))
        .and_then(|ap| ap.on_state())
        .unwrap_or_else(Name::yes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppearanceDict, FieldArena, FieldNode};

    #[test]
    fn no_appearance_and_no_parent_is_yes() {
        let mut arena = FieldArena::new();
        let node = arena.add_root(FieldNode::named("X").with_type("Btn"));
        assert_eq!(resolve_on_value(&arena, node), Name::yes());
    }

    #[test]
    fn reads_own_normal_states() {
        let mut arena = FieldArena::new();
        let node = arena.add_root(
            FieldNode::named("X")
                .with_appearance(AppearanceDict::new().normal_states(["Off", "Checked"])),
        );
        assert_eq!(resolve_on_value(&arena, node), Name::new("Checked"));
    }

    #[test]
    fn down_states_take_priority() {
        let mut arena = FieldArena::new();
        let node = arena.add_root(
            FieldNode::named("X").with_appearance(
                AppearanceDict::new()
                    .normal_states(["Off", "Yes"])
                    .down_states(["Off", "1"]),
            ),
        );
        assert_eq!(resolve_on_value(&arena, node), Name::new("1"));
    }

    #[test]
    fn falls_back_to_parent_appearance() {
        let mut arena = FieldArena::new();
        let parent = arena.add_root(
            FieldNode::named("G").with_appearance(AppearanceDict::new().normal_states(["Off", "On"])),
        );
        let kid = arena.add_kid(parent, FieldNode::unnamed());
        assert_eq!(resolve_on_value(&arena, kid), Name::new("On"));
    }

    #[test]
    fn own_appearance_shadows_parent() {
        let mut arena = FieldArena::new();
        let parent = arena.add_root(
            FieldNode::named("G").with_appearance(AppearanceDict::new().normal_states(["Off", "On"])),
        );
        let kid = arena.add_kid(
            parent,
            FieldNode::unnamed().with_appearance(AppearanceDict::new().normal_stream()),
        );
        // The kid's own /AP has no states, and the parent is not consulted.
        assert_eq!(resolve_on_value(&arena, kid), Name::yes());
    }

    #[test]
    fn parent_without_appearance_is_yes() {
        let mut arena = FieldArena::new();
        let parent = arena.add_root(FieldNode::named("G"));
        let kid = arena.add_kid(parent, FieldNode::unnamed());
        assert_eq!(resolve_on_value(&arena, kid), Name::yes());
    }

    #[test]
    fn only_off_state_is_yes() {
        let mut arena = FieldArena::new();
        let node = arena.add_root(
            FieldNode::named("X").with_appearance(AppearanceDict::new().normal_states(["Off"])),
        );
        assert_eq!(resolve_on_value(&arena, node), Name::yes());
    }
}
