//! Dropdown state.

use log::debug;
use serde::Serialize;

use crate::config::ControllerConfig;
use crate::controller::ListController;
use crate::events::ControllerEvent;
use crate::item::TreeItem;
use crate::selection::SelectionMode;

/// A notification from a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum DropdownEvent<T> {
    /// The popup opened.
    Opened,
    /// The popup closed.
    Closed,
    /// A notification from the underlying list.
    List(ControllerEvent<T>),
}

/// A single or multi-select dropdown with a search box.
///
/// `Dropdown` wraps a [`ListController`] and adds the open/closed popup
/// state. Typing while open narrows the options; closing clears the query.
///
/// # Example
///
/// ```ignore
/// let mut fruit = Dropdown::new(ControllerConfig::new(vec![
///     Item::leaf("Apple"),
///     Item::leaf("Banana"),
///     Item::leaf("Avocado"),
/// ]));
/// fruit.open();
/// fruit.set_query("av");
/// fruit.on_key(&KeyCombo::key(Key::Down));
/// fruit.on_key(&KeyCombo::key(Key::Enter)); // selects Avocado and closes
/// ```
#[derive(Debug)]
pub struct Dropdown<T: TreeItem> {
    /// Underlying list state.
    list: ListController<T>,
    /// Whether the popup is open.
    is_open: bool,
    /// Pending notifications.
    events: Vec<DropdownEvent<T>>,
}

impl<T: TreeItem> Dropdown<T> {
    /// Create a closed dropdown.
    pub fn new(config: ControllerConfig<T>) -> Self {
        Self {
            list: ListController::new(config),
            is_open: false,
            events: Vec::new(),
        }
    }

    /// Borrow the underlying list.
    pub fn list(&self) -> &ListController<T> {
        &self.list
    }

    /// Run an operation against the underlying list.
    ///
    /// Notifications it produces are forwarded to the dropdown's queue.
    pub fn with_list<R>(&mut self, f: impl FnOnce(&mut ListController<T>) -> R) -> R {
        let result = f(&mut self.list);
        self.sync();
        result
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the popup is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open the popup.
    ///
    /// Focus starts on the first selected visible option, if any.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        debug!("[arbor] dropdown opened");
        self.events.push(DropdownEvent::Opened);

        let selected_visible = self
            .list
            .selected_ids()
            .into_iter()
            .find(|id| self.list.visible_index(id).is_some());
        if let Some(id) = selected_visible {
            self.list.set_focus(&id);
        }
        self.sync();
    }

    /// Close the popup, clearing the query and focus.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.list.set_query("");
        self.list.clear_focus();
        self.sync();
        debug!("[arbor] dropdown closed");
        self.events.push(DropdownEvent::Closed);
    }

    /// Toggle the popup open/closed.
    pub fn toggle_open(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// The current query.
    pub fn query(&self) -> &str {
        self.list.query()
    }

    /// Replace the query.
    pub fn set_query(&mut self, query: &str) {
        self.list.set_query(query);
        self.sync();
    }

    /// Append a typed character to the query.
    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.list.query().to_string();
        query.push(c);
        self.set_query(&query);
    }

    /// Remove the last character of the query.
    pub fn pop_query_char(&mut self) {
        let mut query = self.list.query().to_string();
        if query.pop().is_some() {
            self.set_query(&query);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Activate an option, as a click would.
    ///
    /// Single-select dropdowns close after a successful activation.
    pub fn activate_item(&mut self, id: &str) -> bool {
        let activated = self.list.activate_item(id);
        self.sync();
        if activated && self.list.selection_mode() == SelectionMode::Single {
            self.close();
        }
        activated
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.list.clear_selection();
        self.sync();
    }

    /// Labels of the selected options in source order, for the closed field.
    pub fn selected_labels(&self) -> Vec<String> {
        self.list
            .selected_items()
            .iter()
            .map(|item| item.label().to_string())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<DropdownEvent<T>> {
        self.sync();
        std::mem::take(&mut self.events)
    }

    /// Move list notifications into the dropdown queue.
    pub(super) fn sync(&mut self) {
        self.events
            .extend(self.list.drain_events().into_iter().map(DropdownEvent::List));
    }

    pub(super) fn list_mut(&mut self) -> &mut ListController<T> {
        &mut self.list
    }
}
