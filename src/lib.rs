//! panesplit - resizable multi-panel splitter
//!
//! This crate provides the splitter engine (percent widths, bounds, drag
//! sessions) and the Elm-style model/update layer of the demo window built
//! on top of it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod replay;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SplitterConfig;
pub use messages::Msg;
pub use model::{AppModel, PanelSplitter, SplitterOptions};
pub use theme::Theme;
