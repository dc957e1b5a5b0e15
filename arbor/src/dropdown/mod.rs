//! Dropdown surface built on the list controller.

mod events;
mod state;

pub use state::{Dropdown, DropdownEvent};
