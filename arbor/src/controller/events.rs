//! Key handling for the list surface.

use crate::item::TreeItem;
use crate::keys::{EventResult, Key, KeyCombo};
use crate::selection::SelectionMode;

use super::navigation::Navigate;
use super::state::ListController;

impl<T: TreeItem> ListController<T> {
    /// Handle a key press while the list has focus.
    ///
    /// Escape is left to the caller; the list has no use for it.
    pub fn on_key(&mut self, key: &KeyCombo) -> EventResult {
        if let Some(result) = self.handle_selection_key(key) {
            return result;
        }

        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        if let Some(result) = self.handle_navigation_key(key) {
            return result;
        }

        EventResult::Ignored
    }

    /// Handle navigation keys (arrows, Home, End, Enter).
    ///
    /// Shift+Up/Down extends a range selection in multiple mode, starting
    /// from the anchor or, without one, from the previously focused item.
    /// Returns `Some(EventResult)` if the key was handled, `None` otherwise.
    pub(crate) fn handle_navigation_key(&mut self, key: &KeyCombo) -> Option<EventResult> {
        let intent = match key.key {
            Key::Down => Navigate::Next,
            Key::Up => Navigate::Previous,
            Key::Home => Navigate::First,
            Key::End => Navigate::Last,
            Key::Right => Navigate::ExpandOrDescend,
            Key::Left => Navigate::CollapseOrAscend,
            Key::Enter => Navigate::Activate,
            _ => return None,
        };

        let origin = self.focused.clone();
        self.navigate(intent);

        if key.modifiers.shift
            && matches!(intent, Navigate::Next | Navigate::Previous)
            && self.selection_mode() == SelectionMode::Multiple
            && let Some(id) = self.focused.clone()
        {
            // The range starts where focus was when no anchor is set yet.
            if self.selection.anchor().is_none()
                && let Some(origin) = origin
            {
                self.selection.set_anchor(&origin);
            }
            self.range_select(&id, false);
        }

        Some(EventResult::Consumed)
    }

    /// Handle selection keys (Space, Ctrl+A).
    ///
    /// Returns `Some(EventResult)` if the key was handled, `None` otherwise.
    fn handle_selection_key(&mut self, key: &KeyCombo) -> Option<EventResult> {
        match key.key {
            Key::Char(' ') if !key.modifiers.ctrl && !key.modifiers.alt => {
                let id = self.focused.clone()?;
                match self.selection_mode() {
                    SelectionMode::Multiple => {
                        self.toggle(&id);
                    }
                    SelectionMode::Single => {
                        self.activate_item(&id);
                    }
                }
                Some(EventResult::Consumed)
            }
            Key::Char('a') if key.modifiers.ctrl && !key.modifiers.alt => {
                if self.select_all() {
                    Some(EventResult::Consumed)
                } else {
                    Some(EventResult::Ignored)
                }
            }
            _ => None,
        }
    }
}
