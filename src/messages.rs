//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Splitter interaction messages
#[derive(Debug, Clone, PartialEq)]
pub enum SplitterMsg {
    /// Primary button pressed at a position (physical pixels)
    PointerDown { x: f64, y: f64 },
    /// Pointer moved to a position (physical pixels)
    PointerMoved { x: f64, y: f64 },
    /// Primary button released, anywhere
    PointerUp,
    /// Pointer left the window. Any drag stays open until `PointerUp`.
    PointerLeft,
    /// Start dragging a handle directly
    BeginDrag(usize),
    /// Move the held handle by `delta` pixels in a container `extent` long
    DragBy { delta: f64, extent: f64 },
    /// Finish the active drag
    EndDrag,
    /// Restore the initial split
    Reset,
}

/// Application-level messages (window events, callback notifications)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Display scale factor changed
    ScaleFactorChanged(f64),
    /// The splitter reported new widths through its resize callback
    PanelsResized(Vec<f64>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Splitter(SplitterMsg),
    App(AppMsg),
}
