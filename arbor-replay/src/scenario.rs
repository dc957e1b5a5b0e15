//! Scenario files: a controller config plus the intents to replay against it.

use std::fs;
use std::path::{Path, PathBuf};

use arbor::prelude::*;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recorded intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Click an item.
    Activate(String),
    /// Flip a node's expansion.
    ToggleExpand(String),
    /// Keyboard navigation intent.
    Navigate(Navigate),
    /// Replace the search query.
    SetQuery(String),
    /// Clear the selection.
    ClearSelection,
    /// Select an item.
    Select(String),
    /// Toggle an item.
    Toggle(String),
}

/// A config and the steps to run against it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Controller configuration.
    pub config: ControllerConfig<Item>,
    /// Steps, applied in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One emitted notification, tagged with the step that caused it.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayLine {
    /// Zero-based step index.
    pub step: usize,
    /// The notification.
    #[serde(flatten)]
    pub event: ControllerEvent<Item>,
}

/// Errors that can occur when loading or replaying a scenario.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The scenario file could not be read.
    #[error("Failed to read scenario '{}': {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scenario was not valid JSON or did not match the schema.
    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// A global logger was already installed.
    #[error("Failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Run every step and collect the notifications in order.
    pub fn replay(self) -> Vec<ReplayLine> {
        let mut controller = ListController::new(self.config);
        let mut lines = Vec::new();

        info!("Replaying {} steps", self.steps.len());
        for (step, intent) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", step, intent);
            apply(&mut controller, intent);
            lines.extend(
                controller
                    .drain_events()
                    .into_iter()
                    .map(|event| ReplayLine { step, event }),
            );
        }
        lines
    }
}

fn apply(controller: &mut ListController<Item>, step: &Step) {
    match step {
        Step::Activate(id) => {
            controller.activate_item(id);
        }
        Step::ToggleExpand(id) => {
            controller.toggle_expand(id);
        }
        Step::Navigate(intent) => {
            controller.navigate(*intent);
        }
        Step::SetQuery(query) => controller.set_query(query),
        Step::ClearSelection => controller.clear_selection(),
        Step::Select(id) => {
            controller.select(id);
        }
        Step::Toggle(id) => {
            controller.toggle(id);
        }
    }
}
