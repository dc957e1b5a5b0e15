//! Notifications emitted by the controller.
//!
//! Operations push events onto the controller's queue. The rendering layer
//! drains the queue after each interaction (see
//! [`ListController::drain_events`](crate::controller::ListController::drain_events))
//! and redraws from it.

use serde::Serialize;

use crate::flatten::VisibleNode;

/// A notification for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ControllerEvent<T> {
    /// Selection was touched; carries the selected items in source order.
    SelectionChanged(Vec<T>),
    /// An item was activated (click, Enter).
    ItemActivated(T),
    /// Focus moved. `None` means nothing is focused.
    FocusChanged(Option<String>),
    /// The visible sequence was recomputed and differs from before.
    VisibleChanged(Vec<VisibleNode>),
    /// A node was expanded.
    Expanded(String),
    /// A node was collapsed.
    Collapsed(String),
}

impl<T> ControllerEvent<T> {
    /// Short name of the event kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ControllerEvent::SelectionChanged(_) => "selection_changed",
            ControllerEvent::ItemActivated(_) => "item_activated",
            ControllerEvent::FocusChanged(_) => "focus_changed",
            ControllerEvent::VisibleChanged(_) => "visible_changed",
            ControllerEvent::Expanded(_) => "expanded",
            ControllerEvent::Collapsed(_) => "collapsed",
        }
    }
}
