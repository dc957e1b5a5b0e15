//! Selection, expansion and roving-focus state for list, tree and dropdown
//! surfaces.
//!
//! `arbor` does no rendering. A UI layer feeds it intents (clicks, keys,
//! expand toggles, search text) and redraws from the notifications it
//! queues.

pub mod config;
pub mod controller;
pub mod dropdown;
pub mod events;
pub mod expansion;
pub mod filter;
pub mod flatten;
pub mod item;
pub mod keys;
pub mod selection;

pub mod prelude {
    pub use crate::config::{ConfigError, ControllerConfig};
    pub use crate::controller::{ListController, Navigate};
    pub use crate::dropdown::{Dropdown, DropdownEvent};
    pub use crate::events::ControllerEvent;
    pub use crate::filter::FilterMode;
    pub use crate::flatten::{FlatNode, VisibleNode, flatten};
    pub use crate::item::{Icon, IconHandle, Item, TreeItem};
    pub use crate::keys::{EventResult, Key, KeyCombo, Modifiers};
    pub use crate::selection::{Selection, SelectionMode};
}
