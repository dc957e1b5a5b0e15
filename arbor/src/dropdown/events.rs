//! Key handling for the Dropdown surface.

use crate::item::TreeItem;
use crate::keys::{EventResult, Key, KeyCombo};

use super::state::Dropdown;

impl<T: TreeItem> Dropdown<T> {
    /// Handle a key press while the dropdown has focus.
    pub fn on_key(&mut self, key: &KeyCombo) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            // Closed state - open on Enter, Space, or Down
            return match key.key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        // Open state - search, navigate and select
        match key.key {
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            Key::Enter => {
                if let Some(id) = self.list().focused_id().map(str::to_string) {
                    self.activate_item(&id);
                }
                EventResult::Consumed
            }
            Key::Backspace => {
                self.pop_query_char();
                EventResult::Consumed
            }
            Key::Char(c) if !c.is_control() => {
                self.push_query_char(c);
                EventResult::Consumed
            }
            _ => {
                let result = self.list_mut().handle_navigation_key(key);
                self.sync();
                result.unwrap_or(EventResult::Ignored)
            }
        }
    }
}
