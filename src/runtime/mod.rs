//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and event mapping

pub mod app;

pub use app::App;
