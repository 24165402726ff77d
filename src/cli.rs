//! Command-line argument parsing for the demo
//!
//! Supports:
//! - Loading a config file other than the default one
//! - Overriding panel count, widths, bounds and handle thickness
//! - Headless replay of a drag script

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DemoPanel, SplitterConfig};
use crate::model::layout::SplitDirection;

/// Resizable panel splitter demo
#[derive(Parser, Debug, Default)]
#[command(name = "panesplit", version, about = "Resizable panel splitter demo")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/panesplit/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of panels
    #[arg(short = 'p', long, value_name = "N")]
    pub panels: Option<usize>,

    /// Initial widths in percent, comma separated (e.g. 30,40,30)
    #[arg(short = 'w', long, value_name = "WIDTHS", value_delimiter = ',')]
    pub widths: Option<Vec<f64>>,

    /// Minimum panel width in percent
    #[arg(long, value_name = "PERCENT")]
    pub min_width: Option<f64>,

    /// Maximum panel width in percent
    #[arg(long, value_name = "PERCENT")]
    pub max_width: Option<f64>,

    /// Handle thickness in pixels
    #[arg(long, value_name = "PX")]
    pub thickness: Option<f32>,

    /// Stack panels top-to-bottom
    #[arg(long)]
    pub vertical: bool,

    /// Replay a drag script and print the widths as JSON instead of opening a window.
    /// The script describes its own panels and bounds, so none of the flags
    /// above can be combined with it.
    #[arg(long, value_name = "SCRIPT")]
    pub replay: Option<PathBuf>,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// Open the demo window
    Window,
    /// Run a drag script headlessly
    Replay(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub splitter: SplitterConfig,
}

impl CliArgs {
    /// Apply the CLI overrides on top of `base`
    pub fn into_config(self, base: SplitterConfig) -> Result<StartupConfig, String> {
        if self.replay.is_some() {
            if let Some(flag) = self.splitter_flag() {
                return Err(format!(
                    "{} has no effect with --replay; set it in the replay script",
                    flag
                ));
            }
        }

        let mut splitter = base;

        if let Some(count) = self.panels {
            if count == 0 {
                return Err("At least one panel is required".to_string());
            }
            splitter.panels = (0..count)
                .map(|i| {
                    splitter
                        .panels
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| DemoPanel::new(format!("Panel {}", i + 1)))
                })
                .collect();
        }

        if let Some(widths) = self.widths {
            if widths.len() != splitter.panels.len() {
                return Err(format!(
                    "Got {} widths for {} panels",
                    widths.len(),
                    splitter.panels.len()
                ));
            }
            splitter.initial_widths = Some(widths);
        }

        if let Some(min_width) = self.min_width {
            splitter.min_width = min_width;
        }
        if let Some(max_width) = self.max_width {
            splitter.max_width = max_width;
        }
        if splitter.min_width > splitter.max_width {
            return Err(format!(
                "Minimum width {} is larger than maximum width {}",
                splitter.min_width, splitter.max_width
            ));
        }

        if let Some(thickness) = self.thickness {
            if !thickness.is_finite() || thickness < 0.0 {
                return Err(format!("Invalid handle thickness {}", thickness));
            }
            splitter.splitter_thickness = thickness;
        }

        if self.vertical {
            splitter.direction = SplitDirection::Vertical;
        }

        let mode = match self.replay {
            Some(path) => StartupMode::Replay(path),
            None => StartupMode::Window,
        };

        Ok(StartupConfig { mode, splitter })
    }

    /// First splitter override given on the command line, if any
    fn splitter_flag(&self) -> Option<&'static str> {
        if self.config.is_some() {
            Some("--config")
        } else if self.panels.is_some() {
            Some("--panels")
        } else if self.widths.is_some() {
            Some("--widths")
        } else if self.min_width.is_some() {
            Some("--min-width")
        } else if self.max_width.is_some() {
            Some("--max-width")
        } else if self.thickness.is_some() {
            Some("--thickness")
        } else if self.vertical {
            Some("--vertical")
        } else {
            None
        }
    }
}
