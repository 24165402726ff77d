//! Model types for the splitter demo
//!
//! The splitter engine lives in the submodules; `AppModel` is the state of
//! the demo window built on top of it.

pub mod drag;
pub mod layout;
pub mod panel_set;
pub mod splitter;

pub use drag::{DragSession, PointerCapture, PointerHost};
pub use layout::{HandleBar, HandleState, Rect, SplitDirection, SplitterLayout};
pub use panel_set::{PanelSet, WidthBounds};
pub use splitter::{PanelSplitter, SplitterOptions, WidthsMode};

use crate::config::{DemoPanel, SplitterConfig};
use crate::theme::Theme;

/// Padding around the splitter container, in logical pixels
pub const CONTAINER_PADDING: f32 = 16.0;

/// Gap between a panel's edge and its content card, in logical pixels
pub const PANEL_INSET: f32 = 4.0;

/// Application state for the demo window
#[derive(Debug)]
pub struct AppModel {
    pub splitter: PanelSplitter<DemoPanel>,
    pub theme: Theme,
    pub config: SplitterConfig,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
    pub scale_factor: f64,
    /// Last pointer position in physical pixels
    pub pointer: Option<(f64, f64)>,
    /// Widths last reported by the resize callback
    pub reported_widths: Vec<f64>,
}

impl AppModel {
    pub fn new(config: SplitterConfig, window_width: u32, window_height: u32) -> Self {
        let theme = crate::theme::load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!("{}, using default theme", e);
            Theme::default()
        });

        let splitter = PanelSplitter::new(config.panels.clone(), config.splitter_options());
        let reported_widths = splitter.widths().to_vec();

        Self {
            splitter,
            theme,
            config,
            window_size: (window_width, window_height),
            scale_factor: 1.0,
            pointer: None,
            reported_widths,
        }
    }

    /// Container rect the splitter is laid out in (physical pixels)
    pub fn container_rect(&self) -> Rect {
        let padding = CONTAINER_PADDING * self.scale_factor as f32;
        Rect::new(
            0.0,
            0.0,
            self.window_size.0 as f32,
            self.window_size.1 as f32,
        )
        .inset(padding)
    }

    /// Handle thickness in physical pixels
    pub fn splitter_thickness_px(&self) -> f32 {
        self.splitter.splitter_thickness() * self.scale_factor as f32
    }

    pub fn layout(&self) -> SplitterLayout {
        self.splitter
            .layout_scaled(self.container_rect(), self.splitter_thickness_px())
    }
}
