//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod splitter;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::SplitterMsg;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{update_app, window_title};
pub use splitter::{resize_cursor, update_splitter};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// splitter invariants after every message.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Splitter(m) => splitter::update_splitter(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Pointer motion outside a drag fires constantly; keep it out of the log
    let is_noisy = matches!(&msg, Msg::Splitter(SplitterMsg::PointerMoved { .. }))
        && !model.splitter.is_dragging();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);
    model.splitter.assert_invariants();
    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Splitter(m) => format!("Splitter::{}", variant_name(m)),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

#[cfg(debug_assertions)]
fn variant_name(msg: &SplitterMsg) -> &'static str {
    match msg {
        SplitterMsg::PointerDown { .. } => "PointerDown",
        SplitterMsg::PointerMoved { .. } => "PointerMoved",
        SplitterMsg::PointerUp => "PointerUp",
        SplitterMsg::PointerLeft => "PointerLeft",
        SplitterMsg::BeginDrag(_) => "BeginDrag",
        SplitterMsg::DragBy { .. } => "DragBy",
        SplitterMsg::EndDrag => "EndDrag",
        SplitterMsg::Reset => "Reset",
    }
}
