//! Selection state management.
//!
//! Selection is tracked by string ID so it stays stable when items are
//! added, removed or hidden. The model does not know about items; callers
//! filter out disabled and unknown IDs before reaching it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Selection discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one item is selected (radio-button style).
    #[default]
    Single,
    /// Any number of items can be selected (checkbox style).
    Multiple,
}

impl SelectionMode {
    /// Map a `multi_select` flag to a mode.
    pub fn from_multi(multi_select: bool) -> Self {
        if multi_select {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}

/// ID-based selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selection discipline
    mode: SelectionMode,
    /// Currently selected IDs
    selected: HashSet<String>,
    /// Anchor for range selection (Shift+click starting point)
    anchor: Option<String>,
}

impl Selection {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the anchor ID for range selection.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Set the anchor for the next range selection.
    pub fn set_anchor(&mut self, id: &str) {
        self.anchor = Some(id.to_string());
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }

    /// Select an ID.
    ///
    /// Single mode replaces the selection; multiple mode adds to it.
    /// Returns (added, removed) IDs.
    pub fn select(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        self.anchor = Some(id.to_string());
        match self.mode {
            SelectionMode::Single => {
                let removed: Vec<_> = self.selected.iter().filter(|&i| i != id).cloned().collect();
                let was_selected = self.selected.contains(id);
                self.selected.clear();
                self.selected.insert(id.to_string());
                let added = if was_selected {
                    vec![]
                } else {
                    vec![id.to_string()]
                };
                (added, removed)
            }
            SelectionMode::Multiple => {
                if self.selected.insert(id.to_string()) {
                    (vec![id.to_string()], vec![])
                } else {
                    (vec![], vec![])
                }
            }
        }
    }

    /// Toggle selection of an ID.
    ///
    /// In single mode this behaves like [`select`](Self::select): the sole
    /// selected item cannot be deselected by toggling it again.
    /// Returns (added, removed) IDs.
    pub fn toggle(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        if self.mode == SelectionMode::Single {
            return self.select(id);
        }
        self.anchor = Some(id.to_string());
        if self.selected.remove(id) {
            (vec![], vec![id.to_string()])
        } else {
            self.selected.insert(id.to_string());
            (vec![id.to_string()], vec![])
        }
    }

    /// Remove a single ID (used when items go stale).
    /// Returns true if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.anchor.as_deref() == Some(id) {
            self.anchor = None;
        }
        self.selected.remove(id)
    }

    /// Range select from anchor to target ID (Shift+click behavior).
    ///
    /// Requires the ordered list of selectable IDs to determine the range.
    /// If `extend` is false, clears selection outside the range first.
    /// Single mode falls back to [`select`](Self::select).
    ///
    /// Returns (added, removed) IDs.
    pub fn range_select(
        &mut self,
        target_id: &str,
        all_ids_ordered: &[String],
        extend: bool,
    ) -> (Vec<String>, Vec<String>) {
        if self.mode == SelectionMode::Single {
            return self.select(target_id);
        }

        let anchor_id = self
            .anchor
            .get_or_insert_with(|| target_id.to_string())
            .clone();

        let anchor_pos = all_ids_ordered.iter().position(|id| id == &anchor_id);
        let target_pos = all_ids_ordered.iter().position(|id| id == target_id);

        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => (a.min(t), a.max(t)),
            // If anchor or target not found, just select the target
            _ => {
                if !extend {
                    let removed = self.clear();
                    let (added, _) = self.select(target_id);
                    return (added, removed);
                }
                return self.select(target_id);
            }
        };

        let range = &all_ids_ordered[start..=end];
        let range_ids: HashSet<&str> = range.iter().map(String::as_str).collect();

        let mut removed = Vec::new();
        if !extend {
            removed = self
                .selected
                .iter()
                .filter(|id| !range_ids.contains(id.as_str()))
                .cloned()
                .collect();
            for id in &removed {
                self.selected.remove(id);
            }
        }

        // Walk the range in order so `added` follows the visible order.
        let mut added = Vec::new();
        for id in range {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }

        (added, removed)
    }

    /// Select all items from the provided list of IDs.
    ///
    /// Only applies in multiple mode. Returns the IDs that were newly selected.
    pub fn select_all(&mut self, all_ids: &[String]) -> Vec<String> {
        if self.mode == SelectionMode::Single {
            return vec![];
        }
        let mut added = Vec::new();
        for id in all_ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }
}
