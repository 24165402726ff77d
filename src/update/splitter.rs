//! Splitter message handlers (pointer interaction, drag lifecycle)

use crate::commands::{Cmd, CursorStyle};
use crate::messages::SplitterMsg;
use crate::model::{AppModel, SplitDirection};

/// Handle splitter messages
pub fn update_splitter(model: &mut AppModel, msg: SplitterMsg) -> Option<Cmd> {
    match msg {
        SplitterMsg::PointerDown { x, y } => {
            model.pointer = Some((x, y));
            let handle = model.layout().handle_at_point(x as f32, y as f32)?;
            if model.splitter.drag_begin(handle) {
                Some(Cmd::redraw_with_cursor(resize_cursor(
                    model.splitter.direction(),
                )))
            } else {
                None
            }
        }

        SplitterMsg::PointerMoved { x, y } => {
            let previous = model.pointer.replace((x, y));

            if model.splitter.is_dragging() {
                // Movement since the previous event, along the split axis
                let (prev_x, prev_y) = previous?;
                let delta = model
                    .splitter
                    .direction()
                    .axis_delta(x - prev_x, y - prev_y);
                if delta == 0.0 {
                    return None;
                }
                let extent = model.layout().flexible_extent as f64;
                return model
                    .splitter
                    .drag_move(delta, extent)
                    .then_some(Cmd::Redraw);
            }

            let hovered = model.layout().handle_at_point(x as f32, y as f32);
            if model.splitter.set_hovered(hovered) {
                Some(Cmd::redraw_with_cursor(cursor_for(model)))
            } else {
                None
            }
        }

        SplitterMsg::PointerUp => {
            if !model.splitter.drag_end() {
                return None;
            }
            let hovered = model
                .pointer
                .and_then(|(x, y)| model.layout().handle_at_point(x as f32, y as f32));
            model.splitter.set_hovered(hovered);
            Some(Cmd::redraw_with_cursor(cursor_for(model)))
        }

        SplitterMsg::PointerLeft => {
            // A held handle keeps its drag; only hover is dropped
            if !model.splitter.is_dragging() && model.splitter.set_hovered(None) {
                Some(Cmd::redraw_with_cursor(CursorStyle::Default))
            } else {
                None
            }
        }

        SplitterMsg::BeginDrag(handle) => {
            if model.splitter.drag_begin(handle) {
                Some(Cmd::redraw_with_cursor(resize_cursor(
                    model.splitter.direction(),
                )))
            } else {
                None
            }
        }

        SplitterMsg::DragBy { delta, extent } => {
            model.splitter.drag_move(delta, extent).then_some(Cmd::Redraw)
        }

        SplitterMsg::EndDrag => {
            if model.splitter.drag_end() {
                Some(Cmd::redraw_with_cursor(cursor_for(model)))
            } else {
                None
            }
        }

        SplitterMsg::Reset => model.splitter.reset().then_some(Cmd::Redraw),
    }
}

/// Resize cursor matching the handle orientation
pub fn resize_cursor(direction: SplitDirection) -> CursorStyle {
    match direction {
        SplitDirection::Horizontal => CursorStyle::ColResize,
        SplitDirection::Vertical => CursorStyle::RowResize,
    }
}

fn cursor_for(model: &AppModel) -> CursorStyle {
    if model.splitter.is_dragging() || model.splitter.hovered_handle().is_some() {
        resize_cursor(model.splitter.direction())
    } else {
        CursorStyle::Default
    }
}
