//! PanelSplitter - N resizable panels separated by N-1 drag handles
//!
//! The splitter owns the panel contents, their widths and the transient drag
//! session. Every change to the widths is reported to an optional resize
//! callback, after the state has been updated.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::drag::{DragSession, PointerHost};
use super::layout::{compute_layout, HandleState, Rect, SplitDirection, SplitterLayout};
use super::panel_set::{PanelSet, WidthBounds};

/// Default handle thickness in logical pixels
pub const DEFAULT_SPLITTER_THICKNESS: f32 = 8.0;

/// Callback invoked with the full widths after every change
pub type ResizeCallback = Box<dyn FnMut(&[f64])>;

/// Who owns the widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthsMode {
    /// The splitter owns and mutates its widths
    #[default]
    Uncontrolled,
    /// The caller owns the widths. Drags only propose new widths through the
    /// resize callback; the caller commits them with `set_widths`.
    Controlled,
}

/// Construction options for a [`PanelSplitter`]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterOptions {
    /// Initial widths in percent, one per panel
    pub initial_widths: Option<Vec<f64>>,
    pub bounds: WidthBounds,
    /// Handle thickness in logical pixels
    pub splitter_thickness: f32,
    pub direction: SplitDirection,
    pub mode: WidthsMode,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            initial_widths: None,
            bounds: WidthBounds::default(),
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
            direction: SplitDirection::default(),
            mode: WidthsMode::default(),
        }
    }
}

impl SplitterOptions {
    pub fn with_initial_widths(mut self, widths: impl Into<Vec<f64>>) -> Self {
        self.initial_widths = Some(widths.into());
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = WidthBounds::new(min, max);
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.splitter_thickness = thickness;
        self
    }

    pub fn with_direction(mut self, direction: SplitDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mode(mut self, mode: WidthsMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A set of resizable panels laid out along one axis
pub struct PanelSplitter<P> {
    panels: Vec<P>,
    widths: PanelSet,
    /// Widths computed at construction, restored by `reset`
    initial: Vec<f64>,
    splitter_thickness: f32,
    direction: SplitDirection,
    mode: WidthsMode,
    session: Option<DragSession>,
    hovered: Option<usize>,
    host: PointerHost,
    on_resize: Option<ResizeCallback>,
}

impl<P: fmt::Debug> fmt::Debug for PanelSplitter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelSplitter")
            .field("panels", &self.panels)
            .field("widths", &self.widths)
            .field("splitter_thickness", &self.splitter_thickness)
            .field("direction", &self.direction)
            .field("mode", &self.mode)
            .field("session", &self.session)
            .field("hovered", &self.hovered)
            .field("on_resize", &self.on_resize.is_some())
            .finish()
    }
}

impl<P> PanelSplitter<P> {
    /// Create a splitter with its own pointer host
    pub fn new(panels: Vec<P>, options: SplitterOptions) -> Self {
        Self::with_host(panels, options, PointerHost::new())
    }

    /// Create a splitter that captures the pointer on a shared `host`
    pub fn with_host(panels: Vec<P>, options: SplitterOptions, host: PointerHost) -> Self {
        if panels.is_empty() {
            tracing::warn!("Splitter created without panels");
        }

        let widths = PanelSet::from_initial(
            panels.len(),
            options.initial_widths.as_deref(),
            options.bounds,
        );
        tracing::debug!(
            panels = panels.len(),
            mode = ?options.mode,
            "Splitter widths: {:?}",
            widths.widths()
        );

        Self {
            initial: widths.widths().to_vec(),
            panels,
            widths,
            splitter_thickness: options.splitter_thickness.max(0.0),
            direction: options.direction,
            mode: options.mode,
            session: None,
            hovered: None,
            host,
            on_resize: None,
        }
    }

    /// Builder-style variant of [`set_on_resize`](Self::set_on_resize)
    pub fn on_resize(mut self, callback: impl FnMut(&[f64]) + 'static) -> Self {
        self.set_on_resize(callback);
        self
    }

    pub fn set_on_resize(&mut self, callback: impl FnMut(&[f64]) + 'static) {
        self.on_resize = Some(Box::new(callback));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn widths(&self) -> &[f64] {
        self.widths.widths()
    }

    pub fn bounds(&self) -> WidthBounds {
        self.widths.bounds()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn handle_count(&self) -> usize {
        self.widths.handle_count()
    }

    pub fn splitter_thickness(&self) -> f32 {
        self.splitter_thickness
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    pub fn mode(&self) -> WidthsMode {
        self.mode
    }

    pub fn host(&self) -> &PointerHost {
        &self.host
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handle held by the active drag session
    pub fn active_handle(&self) -> Option<usize> {
        self.session.as_ref().map(DragSession::handle_index)
    }

    pub fn hovered_handle(&self) -> Option<usize> {
        self.hovered
    }

    /// Visual state of handle `index`; an active drag wins over hover
    pub fn handle_state(&self, index: usize) -> HandleState {
        if self.active_handle() == Some(index) {
            HandleState::Active
        } else if self.hovered == Some(index) {
            HandleState::Hovered
        } else {
            HandleState::Idle
        }
    }

    // ========================================================================
    // Drag interaction
    // ========================================================================

    /// Start dragging the handle between panel `handle_index` and the next.
    ///
    /// Returns false (and does nothing) for a nonexistent handle or while
    /// another drag is in progress.
    pub fn drag_begin(&mut self, handle_index: usize) -> bool {
        if handle_index >= self.handle_count() {
            tracing::debug!(
                "Ignoring drag on handle {} ({} handles)",
                handle_index,
                self.handle_count()
            );
            return false;
        }
        if let Some(session) = &self.session {
            tracing::debug!(
                "Ignoring drag on handle {}, handle {} already held",
                handle_index,
                session.handle_index()
            );
            return false;
        }

        tracing::debug!(handle = handle_index, "Drag started");
        self.session = Some(DragSession::begin(handle_index, &self.host));
        true
    }

    /// Apply a pointer movement of `pointer_delta` pixels along the split
    /// axis, in a container `container_extent` pixels long.
    ///
    /// Returns whether the movement was applied (in controlled mode: whether
    /// new widths were proposed).
    pub fn drag_move(&mut self, pointer_delta: f64, container_extent: f64) -> bool {
        let Some(handle_index) = self.active_handle() else {
            return false;
        };
        if container_extent <= 0.0 || !container_extent.is_finite() || !pointer_delta.is_finite()
        {
            tracing::trace!(
                pointer_delta,
                container_extent,
                "Skipping drag move with unusable geometry"
            );
            return false;
        }

        let delta_percent = pointer_delta / container_extent * 100.0;

        match self.mode {
            WidthsMode::Uncontrolled => {
                if !self.widths.apply_delta(handle_index, delta_percent) {
                    return false;
                }
                tracing::trace!(
                    handle = handle_index,
                    delta_percent,
                    "Widths: {:?}",
                    self.widths.widths()
                );
                self.record_move();
                self.notify_resize();
            }
            WidthsMode::Controlled => {
                let Some(proposed) = self.widths.resized(handle_index, delta_percent) else {
                    return false;
                };
                self.record_move();
                if let Some(callback) = self.on_resize.as_mut() {
                    callback(&proposed);
                }
            }
        }
        true
    }

    /// Finish the active drag. No-op without one.
    pub fn drag_end(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(
                    handle = session.handle_index(),
                    moves = session.moves(),
                    "Drag ended"
                );
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Direct width changes
    // ========================================================================

    /// Commit widths supplied by the caller (the controlled-mode commit path).
    ///
    /// Widths of the wrong length, or not summing to 100, are ignored.
    pub fn set_widths(&mut self, widths: &[f64]) -> bool {
        match self.widths.replace(widths) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Ignoring widths {:?}: {}", widths, e);
                false
            }
        }
    }

    /// Restore the split the splitter was created with
    pub fn reset(&mut self) -> bool {
        if self.widths.widths() == self.initial.as_slice() {
            return false;
        }
        match self.mode {
            WidthsMode::Uncontrolled => {
                let initial = self.initial.clone();
                if self.widths.replace(&initial).is_err() {
                    return false;
                }
                self.notify_resize();
            }
            WidthsMode::Controlled => {
                if let Some(callback) = self.on_resize.as_mut() {
                    callback(&self.initial);
                }
            }
        }
        true
    }

    /// Track the handle under the pointer. Returns whether it changed.
    pub fn set_hovered(&mut self, handle: Option<usize>) -> bool {
        let handle = handle.filter(|index| *index < self.handle_count());
        if self.hovered == handle {
            return false;
        }
        self.hovered = handle;
        true
    }

    /// Lay the panels and handles out inside `available`.
    ///
    /// `thickness` is the handle thickness in physical pixels (the logical
    /// thickness scaled for the display).
    pub fn layout_scaled(&self, available: Rect, thickness: f32) -> SplitterLayout {
        compute_layout(available, self.widths.widths(), thickness, self.direction)
    }

    /// Lay out with the unscaled handle thickness
    pub fn layout(&self, available: Rect) -> SplitterLayout {
        self.layout_scaled(available, self.splitter_thickness)
    }

    /// Validate internal invariants in debug builds.
    ///
    /// Checks that there is one width per panel, that the widths add up to
    /// 100 and that an active drag holds an existing handle.
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert_eq!(
            self.widths.len(),
            self.panels.len(),
            "{} widths for {} panels",
            self.widths.len(),
            self.panels.len()
        );

        if !self.widths.is_empty() {
            let total = self.widths.total();
            assert!(
                (total - 100.0).abs() <= super::panel_set::SUM_TOLERANCE,
                "widths {:?} sum to {}",
                self.widths.widths(),
                total
            );
        }

        if let Some(handle) = self.active_handle() {
            assert!(
                handle < self.handle_count(),
                "drag holds handle {} but only {} handles exist",
                handle,
                self.handle_count()
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    fn record_move(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.record_move();
        }
    }

    fn notify_resize(&mut self) {
        if let Some(callback) = self.on_resize.as_mut() {
            callback(self.widths.widths());
        }
    }
}
