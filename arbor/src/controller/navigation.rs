//! Roving-focus keyboard navigation.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::item::TreeItem;

use super::state::ListController;

/// Abstract navigation intents (not key codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigate {
    /// Next enabled item, wrapping to the first.
    Next,
    /// Previous enabled item, wrapping to the last.
    Previous,
    /// First enabled item.
    First,
    /// Last enabled item.
    Last,
    /// Expand the focused node, or move into its first child if expanded.
    ExpandOrDescend,
    /// Collapse the focused node, or move to its parent if collapsed.
    CollapseOrAscend,
    /// Activate the focused item, as a click would.
    Activate,
}

impl<T: TreeItem> ListController<T> {
    /// Apply a navigation intent. Returns true if any state changed.
    ///
    /// Every intent is total: with nothing to act on it is a no-op.
    pub fn navigate(&mut self, intent: Navigate) -> bool {
        let changed = match intent {
            Navigate::Next => self.focus_next(),
            Navigate::Previous => self.focus_previous(),
            Navigate::First => self.focus_first(),
            Navigate::Last => self.focus_last(),
            Navigate::ExpandOrDescend => self.expand_or_descend(),
            Navigate::CollapseOrAscend => self.collapse_or_ascend(),
            Navigate::Activate => self.activate_focused(),
        };
        if !changed {
            trace!("[arbor] navigate {:?}: no-op", intent);
        }
        changed
    }

    /// Move focus to the next enabled item, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        let len = self.visible.len();
        let Some(current) = self.focused_index() else {
            return self.focus_first();
        };
        let target = (1..len)
            .map(|step| (current + step) % len)
            .find(|&i| !self.visible[i].is_disabled);
        target.is_some_and(|i| self.focus_index(i))
    }

    /// Move focus to the previous enabled item, wrapping around.
    pub fn focus_previous(&mut self) -> bool {
        let len = self.visible.len();
        let Some(current) = self.focused_index() else {
            return self.focus_last();
        };
        let target = (1..len)
            .map(|step| (current + len - step) % len)
            .find(|&i| !self.visible[i].is_disabled);
        target.is_some_and(|i| self.focus_index(i))
    }

    /// Move focus to the first enabled item.
    pub fn focus_first(&mut self) -> bool {
        let target = self.visible.iter().position(|n| !n.is_disabled);
        target.is_some_and(|i| self.focus_index(i))
    }

    /// Move focus to the last enabled item.
    pub fn focus_last(&mut self) -> bool {
        let target = self.visible.iter().rposition(|n| !n.is_disabled);
        target.is_some_and(|i| self.focus_index(i))
    }

    /// Expand the focused node if collapsed (focus stays), otherwise move to
    /// its first enabled child.
    fn expand_or_descend(&mut self) -> bool {
        let Some(current) = self.focused_index() else {
            return false;
        };
        let node = &self.visible[current];
        if node.has_children && !node.is_expanded {
            let id = node.id.clone();
            return self.expand(&id);
        }
        if !node.is_expanded {
            return false;
        }

        let child_depth = node.depth + 1;
        let target = self.visible[current + 1..]
            .iter()
            .take_while(|n| n.depth >= child_depth)
            .position(|n| n.depth == child_depth && !n.is_disabled)
            .map(|offset| current + 1 + offset);
        target.is_some_and(|i| self.focus_index(i))
    }

    /// Collapse the focused node if expanded (focus stays), otherwise move
    /// to its parent when that is enabled.
    fn collapse_or_ascend(&mut self) -> bool {
        let Some(current) = self.focused_index() else {
            return false;
        };
        let node = &self.visible[current];
        if node.is_expanded {
            let id = node.id.clone();
            return self.collapse(&id);
        }
        if node.depth == 0 {
            return false;
        }

        // Parent is the closest earlier node one level up.
        let parent_depth = node.depth - 1;
        let parent = self.visible[..current]
            .iter()
            .rposition(|n| n.depth == parent_depth);
        match parent {
            Some(i) if !self.visible[i].is_disabled => self.focus_index(i),
            _ => false,
        }
    }

    /// Activate the focused item.
    fn activate_focused(&mut self) -> bool {
        match self.focused.clone() {
            Some(id) => self.activate_item(&id),
            None => false,
        }
    }
}
