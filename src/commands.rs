//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Mouse cursor shape requested by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    /// Over or dragging a handle between side-by-side panels
    ColResize,
    /// Over or dragging a handle between stacked panels
    RowResize,
}

/// Side effects requested by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    Redraw,
    SetCursor(CursorStyle),
    SetTitle(String),
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether this command (or any command in a batch) needs a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => false,
        }
    }

    /// Redraw and switch the cursor in one go
    pub fn redraw_with_cursor(cursor: CursorStyle) -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::SetCursor(cursor)])
    }
}
