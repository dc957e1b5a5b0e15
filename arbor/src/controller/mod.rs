//! The selectable hierarchical list controller.
//!
//! A pure state machine: the UI raises intents (click, key, expand toggle,
//! query change), the controller updates selection, expansion, focus and
//! the visible sequence, and queues notifications for the UI to redraw.
//!
//! # Example
//!
//! ```ignore
//! use arbor::prelude::*;
//!
//! let items = vec![
//!     Item::new("root", "Root").with_children(vec![Item::leaf("x"), Item::leaf("y")]),
//! ];
//! let mut list = ListController::new(ControllerConfig::new(items));
//!
//! list.toggle_expand("root");
//! list.navigate(Navigate::Next);
//! list.on_key(&KeyCombo::key(Key::Down));
//! list.on_key(&KeyCombo::key(Key::Enter));
//!
//! for event in list.drain_events() {
//!     // redraw
//! }
//! ```

mod events;
mod navigation;
mod state;

pub use navigation::Navigate;
pub use state::ListController;
