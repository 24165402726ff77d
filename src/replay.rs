//! Headless replay of scripted drag sequences
//!
//! A script describes a splitter and a list of steps. Running it feeds the
//! steps through a [`PanelSplitter`] and records the widths after each one,
//! which makes drag behavior easy to inspect without a window.
//!
//! ```yaml
//! panels: 3
//! initial_widths: [30, 40, 30]
//! container_extent: 1000
//! steps:
//!   - op: begin
//!     handle: 0
//!   - op: move
//!     delta: 50
//!   - op: end
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::panel_set::{WidthBounds, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::model::splitter::{PanelSplitter, SplitterOptions};

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Grab a handle
    Begin { handle: usize },
    /// Move the pointer by `delta` pixels along the split axis
    Move { delta: f64 },
    /// Release the pointer
    End,
    /// Restore the initial split
    Reset,
}

/// A splitter setup plus the steps to run against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub panels: usize,
    #[serde(default)]
    pub initial_widths: Option<Vec<f64>>,
    #[serde(default = "default_min_width")]
    pub min_width: f64,
    #[serde(default = "default_max_width")]
    pub max_width: f64,
    /// Container extent in pixels that pointer deltas are measured against
    #[serde(default = "default_container_extent")]
    pub container_extent: f64,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

fn default_min_width() -> f64 {
    DEFAULT_MIN_WIDTH
}

fn default_max_width() -> f64 {
    DEFAULT_MAX_WIDTH
}

fn default_container_extent() -> f64 {
    1000.0
}

/// Splitter state after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    /// Index of the step in the script
    pub step: usize,
    /// Whether the step changed anything
    pub applied: bool,
    pub widths: Vec<f64>,
    /// Handle held after the step
    pub dragging: Option<usize>,
}

/// Load a script from YAML, or JSON when the extension is `.json`
pub fn load(path: &Path) -> Result<ReplayScript, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read replay script {}: {}", path.display(), e))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let script = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };
    script.map_err(|e| format!("Failed to parse replay script {}: {}", path.display(), e))
}

/// Run every step of `script`, returning one frame per step
pub fn run(script: &ReplayScript) -> Vec<ReplayFrame> {
    let options = SplitterOptions {
        initial_widths: script.initial_widths.clone(),
        bounds: WidthBounds::new(script.min_width, script.max_width),
        ..SplitterOptions::default()
    };
    let mut splitter = PanelSplitter::new((0..script.panels).collect::<Vec<_>>(), options);

    tracing::debug!(
        steps = script.steps.len(),
        "Replaying from widths {:?}",
        splitter.widths()
    );

    script
        .steps
        .iter()
        .enumerate()
        .map(|(step, action)| {
            let applied = match action {
                ReplayStep::Begin { handle } => splitter.drag_begin(*handle),
                ReplayStep::Move { delta } => splitter.drag_move(*delta, script.container_extent),
                ReplayStep::End => splitter.drag_end(),
                ReplayStep::Reset => splitter.reset(),
            };
            ReplayFrame {
                step,
                applied,
                widths: splitter.widths().to_vec(),
                dragging: splitter.active_handle(),
            }
        })
        .collect()
}
