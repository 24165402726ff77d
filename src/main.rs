//! panesplit demo binary
//!
//! Opens a window with resizable panels, or replays a drag script headlessly
//! when started with `--replay`.

mod runtime;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use panesplit::cli::{CliArgs, StartupMode};
use panesplit::config::SplitterConfig;
use panesplit::replay;

use runtime::App;

fn main() -> Result<()> {
    panesplit::tracing::init();

    let args = CliArgs::parse();

    // Replay scripts carry their own setup
    let base = match &args.config {
        Some(path) => SplitterConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => SplitterConfig::load(),
    };
    let startup = args.into_config(base).map_err(anyhow::Error::msg)?;

    match startup.mode {
        StartupMode::Replay(path) => {
            let script = replay::load(&path).map_err(anyhow::Error::msg)?;
            let frames = replay::run(&script);
            let json = serde_json::to_string_pretty(&frames)
                .context("Failed to serialize replay frames")?;
            println!("{}", json);
        }
        StartupMode::Window => {
            let event_loop = EventLoop::new()?;
            let mut app = App::new(960, 600, startup.splitter);
            event_loop.run_app(&mut app)?;
            if let Some(e) = app.take_error() {
                return Err(e);
            }
        }
    }

    Ok(())
}
