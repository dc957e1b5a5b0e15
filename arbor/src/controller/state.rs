//! List controller state.

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};

use crate::config::ControllerConfig;
use crate::events::ControllerEvent;
use crate::expansion::Expansion;
use crate::filter::{Filter, FilterMode};
use crate::flatten::{VisibleNode, flatten};
use crate::item::TreeItem;
use crate::selection::{Selection, SelectionMode};

/// Where an ID lives in the tree. Only the first occurrence is indexed.
#[derive(Debug, Clone)]
struct NodeEntry {
    /// Child indices from the roots down to the node.
    path: Vec<usize>,
    expandable: bool,
    disabled: bool,
}

/// Selection, expansion, focus and search state for one list or dropdown.
///
/// `ListController<T>` owns:
/// - The item tree (never mutated, only replaced)
/// - The selection set (single or multi-select by item ID)
/// - The expansion set
/// - The roving focus (a single focused item ID)
/// - The search query
/// - The cached visible sequence
///
/// Every operation is total: unknown IDs, disabled items and impossible
/// moves are no-ops. Changes are reported as [`ControllerEvent`]s, drained
/// with [`drain_events`](Self::drain_events).
///
/// # Example
///
/// ```ignore
/// let mut list = ListController::new(ControllerConfig::new(items).multi_select());
/// list.navigate(Navigate::Next);
/// list.navigate(Navigate::Activate);
/// for event in list.drain_events() {
///     redraw(event);
/// }
/// ```
#[derive(Debug)]
pub struct ListController<T: TreeItem> {
    /// Root items.
    pub(super) items: Vec<T>,
    /// ID lookup (first occurrence wins).
    index: HashMap<String, NodeEntry>,
    /// Selection state (by ID).
    pub(super) selection: Selection,
    /// Set of expanded node IDs.
    pub(super) expansion: Expansion,
    /// Search query.
    filter: Filter,
    /// Flattened visible nodes (rebuilt on expand/collapse/filter).
    pub(super) visible: Vec<VisibleNode>,
    /// Focused item ID.
    pub(super) focused: Option<String>,
    /// Pending notifications.
    events: Vec<ControllerEvent<T>>,
}

impl<T: TreeItem> ListController<T> {
    /// Create a controller from a config.
    pub fn new(config: ControllerConfig<T>) -> Self {
        let index = build_index(&config.items);
        let mode = config.selection_mode();
        let mut controller = Self {
            items: config.items,
            index,
            selection: Selection::new(mode),
            expansion: Expansion::new(),
            filter: Filter::new(config.filter_mode),
            visible: Vec::new(),
            focused: None,
            events: Vec::new(),
        };

        for id in &config.initially_expanded {
            if controller.is_expandable(id) {
                controller.expansion.expand(id);
            }
        }

        let seeded: Vec<String> = controller
            .ids_in_source_order()
            .into_iter()
            .filter(|id| {
                let preselected = controller
                    .item(id)
                    .map(|item| item.is_preselected())
                    .unwrap_or(false);
                (preselected || config.initially_selected.contains(id))
                    && controller.is_selectable(id)
            })
            .collect();
        match controller.selection.mode() {
            SelectionMode::Single => {
                if let Some(first) = seeded.first() {
                    controller.selection.select(first);
                }
            }
            SelectionMode::Multiple => {
                for id in &seeded {
                    controller.selection.select(id);
                }
            }
        }

        controller.visible = controller.compute_visible();
        debug!(
            "[arbor] controller created: {} visible, {} selected, mode {:?}",
            controller.visible.len(),
            controller.selection.len(),
            controller.selection.mode()
        );
        controller
    }

    /// Replace all state from a new config.
    ///
    /// Pending events are discarded; the caller re-renders from scratch.
    pub fn reset(&mut self, config: ControllerConfig<T>) {
        *self = Self::new(config);
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the root items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the item tree.
    ///
    /// Selection and expansion entries for IDs that no longer exist (or are
    /// now disabled / no longer expandable) are dropped, then the visible
    /// sequence is rebuilt and focus clamped.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = build_index(&self.items);

        let stale: Vec<String> = self
            .selection
            .selected()
            .into_iter()
            .filter(|id| !self.is_selectable(id))
            .collect();
        for id in &stale {
            self.selection.remove(id);
        }
        if !stale.is_empty() {
            debug!("[arbor] dropped stale selection {:?}", stale);
            self.push_selection_changed();
        }

        let index = &self.index;
        self.expansion
            .retain(|id| index.get(id).is_some_and(|entry| entry.expandable));

        self.refresh_visible();
    }

    /// Find an item by ID anywhere in the tree (including collapsed).
    pub fn item(&self, id: &str) -> Option<&T> {
        let entry = self.index.get(id)?;
        node_at(&self.items, &entry.path)
    }

    /// Check if an ID exists in the tree.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Check if an item exists and is disabled.
    pub fn is_disabled(&self, id: &str) -> bool {
        self.index.get(id).is_some_and(|entry| entry.disabled)
    }

    /// Check if an item exists, is enabled, and so may be selected.
    pub fn is_selectable(&self, id: &str) -> bool {
        self.index.get(id).is_some_and(|entry| !entry.disabled)
    }

    /// Check if an item exists and has children.
    pub fn is_expandable(&self, id: &str) -> bool {
        self.index.get(id).is_some_and(|entry| entry.expandable)
    }

    /// All distinct IDs in pre-order over the whole tree.
    fn ids_in_source_order(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        collect_ids(&self.items, &mut seen, &mut out);
        out
    }

    // -------------------------------------------------------------------------
    // Visible sequence
    // -------------------------------------------------------------------------

    /// The current visible sequence.
    pub fn visible(&self) -> &[VisibleNode] {
        &self.visible
    }

    /// Number of visible nodes.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Position of an ID in the visible sequence.
    pub fn visible_index(&self, id: &str) -> Option<usize> {
        self.visible.iter().position(|n| n.id == id)
    }

    /// Visible IDs in order, skipping disabled nodes.
    pub(super) fn visible_enabled_ids(&self) -> Vec<String> {
        self.visible
            .iter()
            .filter(|n| !n.is_disabled)
            .map(|n| n.id.clone())
            .collect()
    }

    fn compute_visible(&self) -> Vec<VisibleNode> {
        let filter = &self.filter;
        let pred = |item: &T| filter.matches(item.label());
        let predicate: Option<&dyn Fn(&T) -> bool> = if filter.is_active() {
            Some(&pred)
        } else {
            None
        };
        let flat = flatten(&self.items, self.expansion.ids(), predicate);

        // Only the indexed occurrence of an ID is shown. Later duplicates, and
        // everything below them, are skipped even when the first is hidden.
        let mut out = Vec::with_capacity(flat.len());
        let mut skip_below: Option<u16> = None;
        for node in &flat {
            if let Some(depth) = skip_below {
                if node.depth > depth {
                    continue;
                }
                skip_below = None;
            }
            if !self.is_indexed(node.item) {
                skip_below = Some(node.depth);
                continue;
            }
            out.push(VisibleNode::from(node));
        }
        out
    }

    /// Check if `item` is the occurrence the index resolves its ID to.
    fn is_indexed(&self, item: &T) -> bool {
        self.index
            .get(item.id())
            .and_then(|entry| node_at(&self.items, &entry.path))
            .is_some_and(|first| std::ptr::eq(first, item))
    }

    /// Rebuild the visible sequence, notify if it changed, and clamp focus.
    pub(super) fn refresh_visible(&mut self) {
        let next = self.compute_visible();
        if next == self.visible {
            return;
        }
        let previous = std::mem::replace(&mut self.visible, next);
        trace!(
            "[arbor] visible sequence {} -> {} nodes",
            previous.len(),
            self.visible.len()
        );
        self.events
            .push(ControllerEvent::VisibleChanged(self.visible.clone()));
        self.clamp_focus(&previous);
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// The focused item ID.
    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Position of the focused item in the visible sequence.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused.as_deref().and_then(|id| self.visible_index(id))
    }

    /// The focused item.
    pub fn focused_item(&self) -> Option<&T> {
        self.focused.as_deref().and_then(|id| self.item(id))
    }

    /// Move focus to a visible, enabled item. Returns true if focus moved.
    pub fn set_focus(&mut self, id: &str) -> bool {
        match self.visible_index(id) {
            Some(index) if !self.visible[index].is_disabled => self.focus_index(index),
            _ => {
                trace!("[arbor] set_focus({}) ignored: not focusable", id);
                false
            }
        }
    }

    /// Drop focus. Returns true if something was focused.
    pub fn clear_focus(&mut self) -> bool {
        self.replace_focus(None)
    }

    /// Focus the node at a visible index. Returns true if focus moved.
    pub(super) fn focus_index(&mut self, index: usize) -> bool {
        let id = self.visible.get(index).map(|n| n.id.clone());
        if id.is_none() {
            return false;
        }
        self.replace_focus(id)
    }

    fn replace_focus(&mut self, next: Option<String>) -> bool {
        if self.focused == next {
            return false;
        }
        debug!("[arbor] focus {:?} -> {:?}", self.focused, next);
        self.focused = next.clone();
        self.events.push(ControllerEvent::FocusChanged(next));
        true
    }

    /// Keep focus valid after the visible sequence changed.
    ///
    /// If the focused ID fell out of view, focus goes to its nearest visible
    /// enabled ancestor, else to the nearest enabled node around its old
    /// index, else nowhere.
    fn clamp_focus(&mut self, previous: &[VisibleNode]) {
        let Some(focused) = self.focused.clone() else {
            return;
        };
        if let Some(index) = self.visible_index(&focused)
            && !self.visible[index].is_disabled
        {
            return;
        }

        let Some(old_index) = previous.iter().position(|n| n.id == focused) else {
            self.replace_focus(None);
            return;
        };

        // Ancestors in the old sequence, closest first.
        let mut depth = previous[old_index].depth;
        for node in previous[..old_index].iter().rev() {
            if depth == 0 {
                break;
            }
            if node.depth < depth {
                depth = node.depth;
                if let Some(index) = self.visible_index(&node.id)
                    && !self.visible[index].is_disabled
                {
                    self.focus_index(index);
                    return;
                }
            }
        }

        if self.visible.is_empty() {
            self.replace_focus(None);
            return;
        }
        let start = old_index.min(self.visible.len() - 1);
        let forward = (start..self.visible.len()).find(|&i| !self.visible[i].is_disabled);
        let target =
            forward.or_else(|| (0..start).rev().find(|&i| !self.visible[i].is_disabled));
        match target {
            Some(index) => {
                self.focus_index(index);
            }
            None => {
                self.replace_focus(None);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Check if an item is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected IDs in source order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.ids_in_source_order()
            .into_iter()
            .filter(|id| self.selection.is_selected(id))
            .collect()
    }

    /// Selected items in source order (not insertion order).
    pub fn selected_items(&self) -> Vec<T> {
        self.selected_ids()
            .iter()
            .filter_map(|id| self.item(id).cloned())
            .collect()
    }

    /// Select an item (replaces the selection in single mode).
    ///
    /// Returns false for unknown or disabled IDs.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.is_selectable(id) {
            trace!("[arbor] select({}) ignored: not selectable", id);
            return false;
        }
        let (added, removed) = self.selection.select(id);
        debug!("[arbor] select {}: +{:?} -{:?}", id, added, removed);
        self.push_selection_changed();
        true
    }

    /// Toggle an item (same as [`select`](Self::select) in single mode).
    ///
    /// Returns false for unknown or disabled IDs.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.is_selectable(id) {
            trace!("[arbor] toggle({}) ignored: not selectable", id);
            return false;
        }
        let (added, removed) = self.selection.toggle(id);
        debug!("[arbor] toggle {}: +{:?} -{:?}", id, added, removed);
        self.push_selection_changed();
        true
    }

    /// Range select from the anchor to `id` over the visible enabled items.
    ///
    /// Multiple mode only; single mode falls back to `select`.
    pub fn range_select(&mut self, id: &str, extend: bool) -> bool {
        if !self.is_selectable(id) {
            return false;
        }
        let ordered = self.visible_enabled_ids();
        let (added, removed) = self.selection.range_select(id, &ordered, extend);
        debug!("[arbor] range select to {}: +{:?} -{:?}", id, added, removed);
        self.push_selection_changed();
        true
    }

    /// Select every visible enabled item (multiple mode only).
    pub fn select_all(&mut self) -> bool {
        if self.selection.mode() != SelectionMode::Multiple {
            return false;
        }
        let ordered = self.visible_enabled_ids();
        let added = self.selection.select_all(&ordered);
        debug!("[arbor] select all: +{:?}", added);
        self.push_selection_changed();
        true
    }

    /// Clear the selection unconditionally.
    pub fn clear_selection(&mut self) {
        let removed = self.selection.clear();
        debug!("[arbor] clear selection: -{:?}", removed);
        self.push_selection_changed();
    }

    /// Activate an item, as a pointer click would.
    ///
    /// Focuses it (if visible), toggles or selects it depending on the mode,
    /// and queues an `ItemActivated` notification. Unknown and disabled IDs
    /// are ignored.
    pub fn activate_item(&mut self, id: &str) -> bool {
        if !self.is_selectable(id) {
            trace!("[arbor] activate({}) ignored: not selectable", id);
            return false;
        }
        self.set_focus(id);
        self.toggle(id);
        if let Some(item) = self.item(id).cloned() {
            self.events.push(ControllerEvent::ItemActivated(item));
        }
        true
    }

    fn push_selection_changed(&mut self) {
        let items = self.selected_items();
        self.events.push(ControllerEvent::SelectionChanged(items));
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Check if a node is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Flip a node's expansion. Leaf and unknown IDs are ignored.
    pub fn toggle_expand(&mut self, id: &str) -> bool {
        if !self.is_expandable(id) {
            trace!("[arbor] toggle_expand({}) ignored: not expandable", id);
            return false;
        }
        if self.expansion.toggle(id) {
            self.after_expand(id);
        } else {
            self.after_collapse(id);
        }
        true
    }

    /// Expand a node. Returns true if it was collapsed.
    pub fn expand(&mut self, id: &str) -> bool {
        if !self.is_expandable(id) || !self.expansion.expand(id) {
            return false;
        }
        self.after_expand(id);
        true
    }

    /// Collapse a node. Returns true if it was expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        if !self.expansion.collapse(id) {
            return false;
        }
        self.after_collapse(id);
        true
    }

    /// Expand every expandable node.
    pub fn expand_all(&mut self) {
        let ids: Vec<String> = self
            .ids_in_source_order()
            .into_iter()
            .filter(|id| self.is_expandable(id) && !self.expansion.is_expanded(id))
            .collect();
        for id in &ids {
            self.expansion.expand(id);
            self.events.push(ControllerEvent::Expanded(id.clone()));
        }
        self.refresh_visible();
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        for id in self.expansion.clear() {
            self.events.push(ControllerEvent::Collapsed(id));
        }
        self.refresh_visible();
    }

    fn after_expand(&mut self, id: &str) {
        debug!("[arbor] expanded {}", id);
        self.events.push(ControllerEvent::Expanded(id.to_string()));
        self.refresh_visible();
    }

    fn after_collapse(&mut self, id: &str) {
        debug!("[arbor] collapsed {}", id);
        self.events.push(ControllerEvent::Collapsed(id.to_string()));
        self.refresh_visible();
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// The current search query.
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    /// The filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter.mode()
    }

    /// Replace the search query and rebuild the visible sequence.
    pub fn set_query(&mut self, query: &str) {
        if self.filter.set_query(query) {
            debug!("[arbor] query set to {:?}", query);
            self.refresh_visible();
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent<T>> {
        std::mem::take(&mut self.events)
    }

    /// Check if notifications are pending.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Index every ID by path, keeping the first occurrence.
fn build_index<T: TreeItem>(items: &[T]) -> HashMap<String, NodeEntry> {
    let mut index = HashMap::new();
    let mut duplicates = Vec::new();
    index_items(items, &mut Vec::new(), &mut index, &mut duplicates);
    if !duplicates.is_empty() {
        warn!(
            "[arbor] duplicate item ids, first occurrence wins: {:?}",
            duplicates
        );
    }
    index
}

fn index_items<T: TreeItem>(
    items: &[T],
    path: &mut Vec<usize>,
    index: &mut HashMap<String, NodeEntry>,
    duplicates: &mut Vec<String>,
) {
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        if index.contains_key(item.id()) {
            duplicates.push(item.id().to_string());
        } else {
            index.insert(
                item.id().to_string(),
                NodeEntry {
                    path: path.clone(),
                    expandable: item.is_expandable(),
                    disabled: item.is_disabled(),
                },
            );
        }
        index_items(item.children(), path, index, duplicates);
        path.pop();
    }
}

fn node_at<'a, T: TreeItem>(items: &'a [T], path: &[usize]) -> Option<&'a T> {
    let (&last, parents) = path.split_last()?;
    let mut level = items;
    for &i in parents {
        level = level.get(i)?.children();
    }
    level.get(last)
}

fn collect_ids<T: TreeItem>(items: &[T], seen: &mut HashSet<String>, out: &mut Vec<String>) {
    for item in items {
        if seen.insert(item.id().to_string()) {
            out.push(item.id().to_string());
        }
        collect_ids(item.children(), seen, out);
    }
}
