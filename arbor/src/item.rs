//! Item types that can be held by a list controller.

use serde::{Deserialize, Serialize};

/// Trait for items that can be displayed in a list or tree.
///
/// Implement this trait to let a [`ListController`](crate::controller::ListController)
/// track selection, expansion and focus for your own data.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct FileNode {
///     path: String,
///     name: String,
///     children: Vec<FileNode>,
/// }
///
/// impl TreeItem for FileNode {
///     fn id(&self) -> &str { &self.path }
///     fn label(&self) -> &str { &self.name }
///     fn children(&self) -> &[Self] { &self.children }
/// }
/// ```
pub trait TreeItem: Clone {
    /// Unique, stable identifier for this item.
    ///
    /// This ID must be unique across the entire tree (siblings and
    /// descendants) since selection, expansion and focus are tracked by ID.
    fn id(&self) -> &str;

    /// Text used for display and for search filtering.
    fn label(&self) -> &str;

    /// Disabled items can never be selected or focused.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Whether the source data marks this item as selected on construction.
    fn is_preselected(&self) -> bool {
        false
    }

    /// Child items. Return an empty slice for leaf items.
    fn children(&self) -> &[Self];

    /// Whether this item can be expanded.
    ///
    /// Default implementation returns true if the item has children.
    fn is_expandable(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Opaque handle to an icon already rendered by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(pub u64);

/// Icon attached to an item.
///
/// Never inspected by the controller; the rendering layer resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Icon referenced by name (looked up in an icon set).
    Named(String),
    /// Icon the caller has rendered already.
    Rendered(IconHandle),
}

/// The default item type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Unique ID within the whole tree.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Disabled items cannot be selected or focused.
    pub disabled: bool,
    /// Pre-selected when the controller is built.
    pub selected: bool,
    /// Optional icon, passed through to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Ordered children.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

impl Item {
    /// Create an enabled leaf item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Create an item whose label equals its ID.
    pub fn leaf(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id)
    }

    /// Mark this item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark this item as pre-selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the children.
    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = children;
        self
    }
}

impl TreeItem for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn is_preselected(&self) -> bool {
        self.selected
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_not_expandable() {
        assert!(!Item::leaf("a").is_expandable());
    }

    #[test]
    fn test_parent_is_expandable() {
        let item = Item::leaf("root").with_children(vec![Item::leaf("x")]);
        assert!(item.is_expandable());
    }

    #[test]
    fn test_deserialize_defaults() {
        let item: Item = serde_json::from_str(r#"{"id": "a", "label": "Apple"}"#).unwrap();
        assert_eq!(item.id, "a");
        assert!(!item.disabled);
        assert!(!item.selected);
        assert!(item.children.is_empty());
        assert!(item.icon.is_none());
    }

    #[test]
    fn test_deserialize_icon_variants() {
        let named: Icon = serde_json::from_str(r#"{"named": "folder"}"#).unwrap();
        assert_eq!(named, Icon::Named("folder".into()));
        let rendered: Icon = serde_json::from_str(r#"{"rendered": 7}"#).unwrap();
        assert_eq!(rendered, Icon::Rendered(IconHandle(7)));
    }
}
