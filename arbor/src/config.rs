//! Controller configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::FilterMode;
use crate::item::Item;
use crate::selection::SelectionMode;

/// Configuration accepted at construction or reset time.
///
/// # Example
///
/// ```ignore
/// let config = ControllerConfig::new(items)
///     .multi_select()
///     .expanded(["root"])
///     .selected(["b"]);
/// let controller = ListController::new(config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct ControllerConfig<T> {
    /// Allow any number of selected items.
    pub multi_select: bool,

    /// Root items.
    pub items: Vec<T>,

    /// IDs expanded on construction. Leaf and unknown IDs are dropped.
    pub initially_expanded: HashSet<String>,

    /// IDs selected on construction, in addition to items that mark
    /// themselves as pre-selected. Disabled and unknown IDs are dropped.
    pub initially_selected: HashSet<String>,

    /// How the search query is matched against labels.
    pub filter_mode: FilterMode,
}

impl<T> Default for ControllerConfig<T> {
    fn default() -> Self {
        Self {
            multi_select: false,
            items: Vec::new(),
            initially_expanded: HashSet::new(),
            initially_selected: HashSet::new(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl<T> ControllerConfig<T> {
    /// Create a single-select config over the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Enable multi-select.
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Seed the expansion set.
    pub fn expanded<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initially_expanded.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Seed the selection set.
    pub fn selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initially_selected.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Set the filter mode.
    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Selection mode implied by `multi_select`.
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multi(self.multi_select)
    }
}

impl ControllerConfig<Item> {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON did not describe a valid config.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
