//! Splitter configuration
//!
//! Stored in `~/.config/panesplit/config.yaml`. Only layout preferences live
//! here; the widths a user drags to are never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::layout::SplitDirection;
use crate::model::panel_set::{WidthBounds, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::model::splitter::{SplitterOptions, DEFAULT_SPLITTER_THICKNESS};

/// One panel of the demo window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoPanel {
    pub title: String,
    /// Fill color as "#RRGGBB"; theme accent when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DemoPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }
}

/// Splitter configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Selected theme id ("light", "dark", or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Minimum panel width in percent
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Maximum panel width in percent
    #[serde(default = "default_max_width")]
    pub max_width: f64,

    /// Handle thickness in logical pixels
    #[serde(default = "default_thickness")]
    pub splitter_thickness: f32,

    #[serde(default)]
    pub direction: SplitDirection,

    /// Initial widths in percent; equal split when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_widths: Option<Vec<f64>>,

    #[serde(default = "default_panels")]
    pub panels: Vec<DemoPanel>,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_min_width() -> f64 {
    DEFAULT_MIN_WIDTH
}

fn default_max_width() -> f64 {
    DEFAULT_MAX_WIDTH
}

fn default_thickness() -> f32 {
    DEFAULT_SPLITTER_THICKNESS
}

fn default_panels() -> Vec<DemoPanel> {
    vec![
        DemoPanel::new("Left"),
        DemoPanel::new("Center"),
        DemoPanel::new("Right"),
    ]
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            min_width: default_min_width(),
            max_width: default_max_width(),
            splitter_thickness: default_thickness(),
            direction: SplitDirection::default(),
            initial_widths: None,
            panels: default_panels(),
        }
    }
}

impl SplitterConfig {
    /// Load config from the default location, or return defaults if missing
    /// or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str::<Self>(yaml)
            .map(Self::sanitized)
            .map_err(|e| e.to_string())
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn bounds(&self) -> WidthBounds {
        WidthBounds::new(self.min_width, self.max_width)
    }

    /// Splitter options described by this config
    pub fn splitter_options(&self) -> SplitterOptions {
        SplitterOptions {
            initial_widths: self.initial_widths.clone(),
            bounds: self.bounds(),
            splitter_thickness: self.splitter_thickness,
            direction: self.direction,
            ..SplitterOptions::default()
        }
    }

    /// Replace non-finite numbers with defaults
    fn sanitized(mut self) -> Self {
        if !self.min_width.is_finite() {
            tracing::warn!("Invalid min_width {}, using default", self.min_width);
            self.min_width = default_min_width();
        }
        if !self.max_width.is_finite() {
            tracing::warn!("Invalid max_width {}, using default", self.max_width);
            self.max_width = default_max_width();
        }
        if !self.splitter_thickness.is_finite() || self.splitter_thickness < 0.0 {
            tracing::warn!(
                "Invalid splitter_thickness {}, using default",
                self.splitter_thickness
            );
            self.splitter_thickness = default_thickness();
        }
        self
    }
}
