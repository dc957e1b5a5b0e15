//! Expand/collapse state.
//!
//! The set only ever holds IDs of expandable items; the controller checks
//! that before calling in. Collapsing a node leaves its descendants' entries
//! alone, so they come back in their last state when it is re-expanded.

use std::collections::HashSet;

/// Set of expanded node IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: HashSet<String>,
}

impl Expansion {
    /// Create an empty (all collapsed) expansion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expand a node. Returns true if it was collapsed.
    pub fn expand(&mut self, id: &str) -> bool {
        self.expanded.insert(id.to_string())
    }

    /// Collapse a node. Returns true if it was expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    /// Flip a node. Returns the new expanded state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Collapse everything. Returns the IDs that were expanded.
    pub fn clear(&mut self) -> Vec<String> {
        let mut removed: Vec<_> = self.expanded.drain().collect();
        removed.sort();
        removed
    }

    /// Keep only the IDs for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.expanded.retain(|id| keep(id));
    }

    /// Borrow the raw ID set (for flattening).
    pub fn ids(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Check if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
