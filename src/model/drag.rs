//! Drag sessions and scoped pointer capture
//!
//! While a handle is held, the splitter listens for pointer moves and
//! releases anywhere in the host, not only over the handle. That listener
//! pair is modelled as a [`PointerCapture`] guard: acquiring it registers
//! the listeners and suppresses text selection, dropping it undoes both.
//! A [`DragSession`] owns its capture, so ending the drag or dropping the
//! splitter mid-drag always releases the listeners.

use std::cell::Cell;
use std::rc::Rc;

/// Listeners registered per capture (pointer-move and pointer-up)
pub const LISTENERS_PER_CAPTURE: usize = 2;

#[derive(Debug, Default)]
struct HostState {
    captures: Cell<usize>,
}

/// The host document the splitter registers its global listeners on.
///
/// Cloning shares the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct PointerHost {
    state: Rc<HostState>,
}

impl PointerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the global pointer listeners and suppress text selection
    pub fn capture(&self) -> PointerCapture {
        let captures = self.state.captures.get() + 1;
        self.state.captures.set(captures);
        tracing::trace!(captures, "Pointer listeners registered");
        PointerCapture {
            state: Rc::clone(&self.state),
        }
    }

    pub fn is_captured(&self) -> bool {
        self.state.captures.get() > 0
    }

    /// Number of global pointer listeners currently registered
    pub fn listener_count(&self) -> usize {
        self.state.captures.get() * LISTENERS_PER_CAPTURE
    }

    /// Text selection is suppressed for as long as any capture is held
    pub fn text_selection_enabled(&self) -> bool {
        !self.is_captured()
    }
}

/// Guard for a registered listener pair. Released on drop.
#[derive(Debug)]
#[must_use = "dropping the capture releases the pointer listeners immediately"]
pub struct PointerCapture {
    state: Rc<HostState>,
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        let captures = self.state.captures.get().saturating_sub(1);
        self.state.captures.set(captures);
        tracing::trace!(captures, "Pointer listeners released");
        if captures == 0 {
            tracing::trace!("Text selection restored");
        }
    }
}

/// An in-progress drag of one handle
#[derive(Debug)]
pub struct DragSession {
    handle_index: usize,
    moves: usize,
    _capture: PointerCapture,
}

impl DragSession {
    /// Start dragging `handle_index`, capturing the pointer on `host`
    pub fn begin(handle_index: usize, host: &PointerHost) -> Self {
        Self {
            handle_index,
            moves: 0,
            _capture: host.capture(),
        }
    }

    pub fn handle_index(&self) -> usize {
        self.handle_index
    }

    /// Number of moves applied during this session
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }
}
