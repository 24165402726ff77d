//! Tests for pointer-driven updates of the demo model

mod common;

use common::{assert_widths, handle_center, test_model};
use panesplit::commands::{Cmd, CursorStyle};
use panesplit::config::SplitterConfig;
use panesplit::messages::{AppMsg, Msg, SplitterMsg};
use panesplit::model::{AppModel, HandleState, SplitDirection};
use panesplit::update::{update, window_title};

fn pointer_moved(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Splitter(SplitterMsg::PointerMoved { x, y }))
}

fn pointer_down(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Splitter(SplitterMsg::PointerDown { x, y }))
}

fn pointer_up(model: &mut AppModel) -> Option<Cmd> {
    update(model, Msg::Splitter(SplitterMsg::PointerUp))
}

// ============================================================================
// Pointer drag
// ============================================================================

#[test]
fn test_pointer_drag_moves_handle() {
    let mut model = test_model(3);
    let (x, y) = handle_center(&model, 0);
    let extent = model.layout().flexible_extent as f64;

    pointer_moved(&mut model, x, y);
    let cmd = pointer_down(&mut model, x, y);
    assert_eq!(
        cmd,
        Some(Cmd::redraw_with_cursor(CursorStyle::ColResize))
    );
    assert!(model.splitter.is_dragging());

    // 10% of the flexible track
    let cmd = pointer_moved(&mut model, x + extent / 10.0, y + 40.0);
    assert_eq!(cmd, Some(Cmd::Redraw));
    let third = 100.0 / 3.0;
    assert_widths(model.splitter.widths(), &[third + 10.0, third - 10.0, third]);

    pointer_up(&mut model);
    assert!(!model.splitter.is_dragging());
}

#[test]
fn test_handle_follows_pointer() {
    let mut model = test_model(2);
    let (x, y) = handle_center(&model, 0);

    pointer_moved(&mut model, x, y);
    pointer_down(&mut model, x, y);
    for step in 1..=5 {
        pointer_moved(&mut model, x - 20.0 * step as f64, y);
    }

    let (new_x, _) = handle_center(&model, 0);
    assert!((new_x - (x - 100.0)).abs() < 0.01, "handle at {}", new_x);
}

#[test]
fn test_pointer_up_keeps_hover_under_pointer() {
    let mut model = test_model(3);
    let (x, y) = handle_center(&model, 1);

    pointer_moved(&mut model, x, y);
    pointer_down(&mut model, x, y);
    pointer_moved(&mut model, x + 30.0, y);

    let cmd = pointer_up(&mut model);
    assert_eq!(
        cmd,
        Some(Cmd::redraw_with_cursor(CursorStyle::ColResize))
    );
    assert_eq!(model.splitter.handle_state(1), HandleState::Hovered);
}

#[test]
fn test_pointer_down_outside_handles_does_nothing() {
    let mut model = test_model(3);
    pointer_moved(&mut model, 100.0, 100.0);

    assert_eq!(pointer_down(&mut model, 100.0, 100.0), None);
    assert!(!model.splitter.is_dragging());
}

#[test]
fn test_pointer_up_without_drag_is_noop() {
    let mut model = test_model(3);
    assert_eq!(pointer_up(&mut model), None);
}

#[test]
fn test_drag_survives_pointer_leaving_window() {
    let mut model = test_model(2);
    let (x, y) = handle_center(&model, 0);

    pointer_moved(&mut model, x, y);
    pointer_down(&mut model, x, y);
    update(&mut model, Msg::Splitter(SplitterMsg::PointerLeft));
    assert!(model.splitter.is_dragging());

    pointer_up(&mut model);
    assert!(!model.splitter.is_dragging());
}

#[test]
fn test_vertical_drag_uses_y_movement() {
    let config = SplitterConfig {
        direction: SplitDirection::Vertical,
        ..SplitterConfig::default()
    };
    let mut model = AppModel::new(config, 800, 600);
    let (x, y) = handle_center(&model, 0);
    let extent = model.layout().flexible_extent as f64;

    pointer_moved(&mut model, x, y);
    let cmd = pointer_down(&mut model, x, y);
    assert_eq!(
        cmd,
        Some(Cmd::redraw_with_cursor(CursorStyle::RowResize))
    );

    // Horizontal movement is ignored
    assert_eq!(pointer_moved(&mut model, x + 50.0, y), None);

    pointer_moved(&mut model, x + 50.0, y - extent / 20.0);
    let third = 100.0 / 3.0;
    assert_widths(model.splitter.widths(), &[third - 5.0, third + 5.0, third]);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_sets_resize_cursor() {
    let mut model = test_model(3);
    let (x, y) = handle_center(&model, 0);

    let cmd = pointer_moved(&mut model, x, y);
    assert_eq!(
        cmd,
        Some(Cmd::redraw_with_cursor(CursorStyle::ColResize))
    );
    assert_eq!(model.splitter.hovered_handle(), Some(0));

    // Staying on the same handle changes nothing
    assert_eq!(pointer_moved(&mut model, x, y + 1.0), None);

    let cmd = pointer_moved(&mut model, 50.0, 50.0);
    assert_eq!(cmd, Some(Cmd::redraw_with_cursor(CursorStyle::Default)));
    assert_eq!(model.splitter.hovered_handle(), None);
}

#[test]
fn test_pointer_left_clears_hover() {
    let mut model = test_model(3);
    let (x, y) = handle_center(&model, 1);
    pointer_moved(&mut model, x, y);

    let cmd = update(&mut model, Msg::Splitter(SplitterMsg::PointerLeft));
    assert_eq!(cmd, Some(Cmd::redraw_with_cursor(CursorStyle::Default)));
    assert_eq!(model.splitter.hovered_handle(), None);
}

// ============================================================================
// Direct messages
// ============================================================================

#[test]
fn test_drag_messages() {
    let mut model = test_model(2);

    assert!(update(&mut model, Msg::Splitter(SplitterMsg::BeginDrag(0))).is_some());
    let cmd = update(
        &mut model,
        Msg::Splitter(SplitterMsg::DragBy {
            delta: -200.0,
            extent: 1000.0,
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_widths(model.splitter.widths(), &[30.0, 70.0]);

    assert!(update(&mut model, Msg::Splitter(SplitterMsg::EndDrag)).is_some());
    assert_eq!(update(&mut model, Msg::Splitter(SplitterMsg::EndDrag)), None);

    assert_eq!(
        update(&mut model, Msg::Splitter(SplitterMsg::Reset)),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.splitter.widths(), &[50.0, 50.0]);
}

#[test]
fn test_begin_drag_on_missing_handle() {
    let mut model = test_model(2);
    assert_eq!(
        update(&mut model, Msg::Splitter(SplitterMsg::BeginDrag(1))),
        None
    );
}

// ============================================================================
// App messages
// ============================================================================

#[test]
fn test_resize_changes_layout() {
    let mut model = test_model(2);
    let before = model.layout().flexible_extent;

    let cmd = update(&mut model, Msg::App(AppMsg::Resize(1200, 600)));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.window_size, (1200, 600));
    assert_eq!(model.layout().flexible_extent, before + 400.0);
}

#[test]
fn test_scale_factor_scales_padding_and_handles() {
    let mut model = test_model(2);
    update(&mut model, Msg::App(AppMsg::ScaleFactorChanged(2.0)));

    let layout = model.layout();
    assert_eq!(layout.handles[0].rect.width, 16.0);
    assert_eq!(layout.panels[0].x, 32.0);

    assert_eq!(
        update(&mut model, Msg::App(AppMsg::ScaleFactorChanged(0.0))),
        None
    );
    assert_eq!(model.scale_factor, 2.0);
}

#[test]
fn test_panels_resized_updates_title() {
    let mut model = test_model(2);
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::PanelsResized(vec![35.0, 65.0])),
    );

    assert_eq!(
        cmd,
        Some(Cmd::SetTitle("panesplit - 35.0% | 65.0%".to_string()))
    );
    assert_eq!(model.reported_widths, vec![35.0, 65.0]);
}

#[test]
fn test_window_title_format() {
    assert_eq!(window_title(&[100.0]), "panesplit - 100.0%");
    assert_eq!(
        window_title(&[33.333, 33.333, 33.334]),
        "panesplit - 33.3% | 33.3% | 33.3%"
    );
}
