//! Flattening of an item tree into the visible sequence.
//!
//! The visible sequence is the ordered projection of the tree that is
//! actually reachable at a given moment: expanded nodes reveal their
//! children, collapsed ones prune them, and an optional filter predicate
//! narrows what is shown.

use std::collections::HashSet;

use serde::Serialize;

use crate::item::TreeItem;

/// A visible node in the flattened tree, borrowing the source item.
#[derive(Debug)]
pub struct FlatNode<'a, T: TreeItem> {
    /// The item itself.
    pub item: &'a T,
    /// Depth in tree (0 = root).
    pub depth: u16,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
}

impl<T: TreeItem> Clone for FlatNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TreeItem> Copy for FlatNode<'_, T> {}

impl<T: TreeItem> PartialEq for FlatNode<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.item, other.item)
            && self.depth == other.depth
            && self.has_children == other.has_children
            && self.is_expanded == other.is_expanded
    }
}

/// Owned snapshot of a visible node, as held by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleNode {
    /// Item ID.
    pub id: String,
    /// Depth in tree (0 = root).
    pub depth: u16,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
    /// Whether the item is disabled (never focusable).
    pub is_disabled: bool,
}

impl<T: TreeItem> From<&FlatNode<'_, T>> for VisibleNode {
    fn from(node: &FlatNode<'_, T>) -> Self {
        Self {
            id: node.item.id().to_string(),
            depth: node.depth,
            has_children: node.has_children,
            is_expanded: node.is_expanded,
            is_disabled: node.item.is_disabled(),
        }
    }
}

/// Flatten `items` into the ordered visible sequence.
///
/// Traversal is depth-first pre-order. A node's children are included only
/// if the node has children and its ID is in `expanded`.
///
/// With a `predicate`, a node is shown if it matches, or if any descendant
/// matches at any depth (collapsed or not). Nodes kept only for a descendant
/// stay collapsed unless they are in `expanded`; their children are filtered
/// by the same rule.
pub fn flatten<'a, T: TreeItem>(
    items: &'a [T],
    expanded: &HashSet<String>,
    predicate: Option<&dyn Fn(&T) -> bool>,
) -> Vec<FlatNode<'a, T>> {
    let mut out = Vec::new();
    collect_visible(items, expanded, predicate, 0, &mut out);
    out
}

fn collect_visible<'a, T: TreeItem>(
    items: &'a [T],
    expanded: &HashSet<String>,
    predicate: Option<&dyn Fn(&T) -> bool>,
    depth: u16,
    out: &mut Vec<FlatNode<'a, T>>,
) {
    for item in items {
        if let Some(pred) = predicate
            && !subtree_matches(item, pred)
        {
            continue;
        }

        let has_children = item.is_expandable();
        let is_expanded = has_children && expanded.contains(item.id());

        out.push(FlatNode {
            item,
            depth,
            has_children,
            is_expanded,
        });

        if is_expanded {
            collect_visible(
                item.children(),
                expanded,
                predicate,
                depth.saturating_add(1),
                out,
            );
        }
    }
}

/// True if `item` or any of its descendants satisfies `pred`.
fn subtree_matches<T: TreeItem>(item: &T, pred: &dyn Fn(&T) -> bool) -> bool {
    pred(item) || item.children().iter().any(|c| subtree_matches(c, pred))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn ids<T: TreeItem>(nodes: &[FlatNode<'_, T>]) -> Vec<String> {
        nodes.iter().map(|n| n.item.id().to_string()).collect()
    }

    fn expanded(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("fruit", "Fruit").with_children(vec![
                Item::new("apple", "Apple"),
                Item::new("citrus", "Citrus").with_children(vec![
                    Item::new("lemon", "Lemon"),
                    Item::new("lime", "Lime"),
                ]),
            ]),
            Item::new("veg", "Vegetables").with_children(vec![Item::new("leek", "Leek")]),
        ]
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Item> = vec![];
        assert!(flatten(&items, &HashSet::new(), None).is_empty());
    }

    #[test]
    fn test_collapsed_prunes_children() {
        let items = sample();
        let nodes = flatten(&items, &HashSet::new(), None);
        assert_eq!(ids(&nodes), vec!["fruit", "veg"]);
        assert!(nodes.iter().all(|n| n.has_children && !n.is_expanded));
    }

    #[test]
    fn test_preorder_with_depth() {
        let items = sample();
        let nodes = flatten(&items, &expanded(&["fruit", "citrus"]), None);
        assert_eq!(
            ids(&nodes),
            vec!["fruit", "apple", "citrus", "lemon", "lime", "veg"]
        );
        let depths: Vec<u16> = nodes.iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn test_expanded_grandchild_hidden_under_collapsed_parent() {
        let items = sample();
        let nodes = flatten(&items, &expanded(&["citrus"]), None);
        assert_eq!(ids(&nodes), vec!["fruit", "veg"]);
    }

    #[test]
    fn test_leaf_in_expanded_set_is_not_expanded() {
        let items = vec![Item::leaf("a")];
        let nodes = flatten(&items, &expanded(&["a"]), None);
        assert!(!nodes[0].is_expanded);
    }

    #[test]
    fn test_predicate_keeps_ancestor_of_collapsed_match() {
        let items = sample();
        let pred = |i: &Item| i.label.to_lowercase().contains("lim");
        let nodes = flatten(&items, &HashSet::new(), Some(&pred));
        // Fruit is kept (collapsed) because Lime sits somewhere below it.
        assert_eq!(ids(&nodes), vec!["fruit"]);
        assert!(!nodes[0].is_expanded);
    }

    #[test]
    fn test_predicate_filters_children_of_expanded_nodes() {
        let items = sample();
        let pred = |i: &Item| i.label.to_lowercase().contains("lim");
        let nodes = flatten(&items, &expanded(&["fruit", "citrus"]), Some(&pred));
        assert_eq!(ids(&nodes), vec!["fruit", "citrus", "lime"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let items = sample();
        let set = expanded(&["fruit"]);
        assert_eq!(flatten(&items, &set, None), flatten(&items, &set, None));
    }
}
