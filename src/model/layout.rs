//! Splitter geometry - panel and handle rectangles
//!
//! Handles take a fixed pixel thickness along the split axis. Whatever is
//! left of the container extent is the flexible track, divided among the
//! panels by their percentage widths.

use serde::{Deserialize, Serialize};

// ============================================================================
// Layout Primitives
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Shrink the rect by `amount` on every side (never below zero size)
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2.0).max(0.0),
            (self.height - amount * 2.0).max(0.0),
        )
    }
}

/// Axis along which panels are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDirection {
    /// Panels arranged left-to-right, handles are vertical bars
    #[default]
    Horizontal,
    /// Panels arranged top-to-bottom, handles are horizontal bars
    Vertical,
}

impl SplitDirection {
    /// Extent of `rect` along the split axis
    pub fn extent(self, rect: &Rect) -> f32 {
        match self {
            SplitDirection::Horizontal => rect.width,
            SplitDirection::Vertical => rect.height,
        }
    }

    /// Component of a pointer movement along the split axis
    pub fn axis_delta(self, dx: f64, dy: f64) -> f64 {
        match self {
            SplitDirection::Horizontal => dx,
            SplitDirection::Vertical => dy,
        }
    }
}

/// Visual state of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    /// Pointer is over the handle
    Hovered,
    /// Handle is held by the active drag session
    Active,
}

/// A draggable handle between panel `index` and `index + 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBar {
    /// Direction of the split this handle controls
    pub direction: SplitDirection,
    /// The hit-testing rectangle for this handle
    pub rect: Rect,
    /// Handle index (boundary between panel `index` and `index + 1`)
    pub index: usize,
}

/// Result of laying out a splitter inside a container rect
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitterLayout {
    /// One rect per panel, in display order
    pub panels: Vec<Rect>,
    /// One bar per handle (`panels.len() - 1` of them)
    pub handles: Vec<HandleBar>,
    /// Extent of the flexible track the percentages apply to
    pub flexible_extent: f32,
}

impl SplitterLayout {
    /// Find the handle at a given point (for drag handling)
    pub fn handle_at_point(&self, x: f32, y: f32) -> Option<usize> {
        handle_at_point(&self.handles, x, y)
    }
}

/// Extent left for panels once `count - 1` handles are carved out
pub fn flexible_extent(total: f32, count: usize, thickness: f32) -> f32 {
    let handles = count.saturating_sub(1) as f32;
    (total - thickness * handles).max(0.0)
}

/// Compute panel and handle rects for `widths` (percent) inside `available`.
pub fn compute_layout(
    available: Rect,
    widths: &[f64],
    thickness: f32,
    direction: SplitDirection,
) -> SplitterLayout {
    let count = widths.len();
    let flexible = flexible_extent(direction.extent(&available), count, thickness);

    let mut panels = Vec::with_capacity(count);
    let mut handles = Vec::with_capacity(count.saturating_sub(1));
    let mut offset = 0.0_f32;

    for (i, width) in widths.iter().enumerate() {
        let size = (flexible as f64 * width / 100.0) as f32;

        let panel = match direction {
            SplitDirection::Horizontal => {
                Rect::new(available.x + offset, available.y, size, available.height)
            }
            SplitDirection::Vertical => {
                Rect::new(available.x, available.y + offset, available.width, size)
            }
        };
        panels.push(panel);
        offset += size;

        // Handle after every panel except the last
        if i + 1 < count {
            let rect = match direction {
                SplitDirection::Horizontal => {
                    Rect::new(available.x + offset, available.y, thickness, available.height)
                }
                SplitDirection::Vertical => {
                    Rect::new(available.x, available.y + offset, available.width, thickness)
                }
            };
            handles.push(HandleBar {
                direction,
                rect,
                index: i,
            });
            offset += thickness;
        }
    }

    SplitterLayout {
        panels,
        handles,
        flexible_extent: flexible,
    }
}

/// Find the handle at a given point
pub fn handle_at_point(handles: &[HandleBar], x: f32, y: f32) -> Option<usize> {
    handles
        .iter()
        .find(|handle| handle.rect.contains(x, y))
        .map(|handle| handle.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_extent_subtracts_handles() {
        assert_eq!(flexible_extent(800.0, 3, 8.0), 784.0);
        assert_eq!(flexible_extent(800.0, 1, 8.0), 800.0);
        assert_eq!(flexible_extent(10.0, 4, 8.0), 0.0);
    }

    #[test]
    fn test_single_panel_fills_container() {
        let layout = compute_layout(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            &[100.0],
            8.0,
            SplitDirection::Horizontal,
        );
        assert_eq!(layout.panels, vec![Rect::new(0.0, 0.0, 400.0, 300.0)]);
        assert!(layout.handles.is_empty());
    }

    #[test]
    fn test_rect_inset_never_negative() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0).inset(3.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
