//! Tests for PanelSplitter construction and the drag lifecycle

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::{assert_sums_to_100, assert_widths, recording_splitter, test_splitter};
use panesplit::model::{HandleState, PanelSplitter, PointerHost, SplitterOptions, WidthsMode};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_equal_split_default() {
    let splitter = test_splitter(3, SplitterOptions::default());
    let widths = splitter.widths();

    assert_eq!(widths.len(), 3);
    assert!((widths[0] - 100.0 / 3.0).abs() < 1e-9);
    assert!((widths[1] - 100.0 / 3.0).abs() < 1e-9);
    assert!((widths[2] - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(widths.iter().sum::<f64>(), 100.0);
    assert_eq!(splitter.handle_count(), 2);
}

#[test]
fn test_initial_widths_are_used() {
    let splitter = test_splitter(
        3,
        SplitterOptions::default().with_initial_widths([30.0, 40.0, 30.0]),
    );
    assert_eq!(splitter.widths(), &[30.0, 40.0, 30.0]);
}

#[test]
fn test_initial_widths_wrong_length_fall_back_to_equal_split() {
    let splitter = test_splitter(
        3,
        SplitterOptions::default().with_initial_widths([50.0, 50.0]),
    );
    assert_widths(splitter.widths(), &[100.0 / 3.0, 100.0 / 3.0, 100.0 / 3.0]);
}

#[test]
fn test_initial_widths_with_bad_sum_fall_back_to_equal_split() {
    let splitter = test_splitter(
        2,
        SplitterOptions::default().with_initial_widths([50.0, 60.0]),
    );
    assert_eq!(splitter.widths(), &[50.0, 50.0]);

    let splitter = test_splitter(
        2,
        SplitterOptions::default().with_initial_widths([f64::NAN, 100.0]),
    );
    assert_eq!(splitter.widths(), &[50.0, 50.0]);
}

#[test]
fn test_single_panel_takes_everything() {
    for initial in [None, Some(vec![40.0]), Some(vec![40.0, 60.0])] {
        let options = SplitterOptions {
            initial_widths: initial.clone(),
            ..SplitterOptions::default()
        };
        let mut splitter = test_splitter(1, options);

        assert_eq!(splitter.widths(), &[100.0], "initial {:?}", initial);
        assert_eq!(splitter.handle_count(), 0);
        assert!(!splitter.drag_begin(0));
        assert!(!splitter.is_dragging());
    }
}

#[test]
fn test_zero_panels() {
    let mut splitter = test_splitter(0, SplitterOptions::default());
    assert!(splitter.is_empty());
    assert!(splitter.widths().is_empty());
    assert_eq!(splitter.handle_count(), 0);
    assert!(!splitter.drag_begin(0));
    splitter.assert_invariants();
}

// ============================================================================
// Drag lifecycle
// ============================================================================

#[test]
fn test_drag_move_without_session_is_noop() {
    let (mut splitter, log) = recording_splitter(3, SplitterOptions::default());
    let before = splitter.widths().to_vec();

    assert!(!splitter.drag_move(120.0, 800.0));

    assert_eq!(splitter.widths(), before.as_slice());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_drag_end_without_session_is_noop() {
    let mut splitter = test_splitter(3, SplitterOptions::default());
    assert!(!splitter.drag_end());
    assert!(!splitter.drag_end());
}

#[test]
fn test_drag_begin_on_missing_handle_is_ignored() {
    let mut splitter = test_splitter(3, SplitterOptions::default());
    assert!(!splitter.drag_begin(2));
    assert!(!splitter.drag_begin(usize::MAX));
    assert!(!splitter.is_dragging());
}

#[test]
fn test_second_drag_begin_is_ignored() {
    let host = PointerHost::new();
    let mut splitter =
        PanelSplitter::with_host(vec!['a', 'b', 'c'], SplitterOptions::default(), host.clone());

    assert!(splitter.drag_begin(0));
    assert!(!splitter.drag_begin(1));

    assert_eq!(splitter.active_handle(), Some(0));
    assert_eq!(host.listener_count(), 2);
}

#[test]
fn test_end_to_end_three_panels() {
    let (mut splitter, log) = recording_splitter(
        3,
        SplitterOptions::default().with_initial_widths([30.0, 40.0, 30.0]),
    );

    assert!(splitter.drag_begin(0));
    assert!(splitter.drag_move(50.0, 1000.0));
    assert!(splitter.drag_end());
    assert_widths(splitter.widths(), &[35.0, 35.0, 30.0]);

    assert!(splitter.drag_begin(1));
    assert!(splitter.drag_move(-100.0, 1000.0));
    assert!(splitter.drag_end());
    assert_widths(splitter.widths(), &[35.0, 25.0, 40.0]);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_widths(&log[0], &[35.0, 35.0, 30.0]);
    assert_widths(&log[1], &[35.0, 25.0, 40.0]);
}

#[test]
fn test_drag_past_bound_clamps_pair() {
    let mut splitter = test_splitter(
        2,
        SplitterOptions::default()
            .with_bounds(10.0, 90.0)
            .with_initial_widths([50.0, 50.0]),
    );

    splitter.drag_begin(0);
    splitter.drag_move(600.0, 1000.0);

    assert_widths(splitter.widths(), &[90.0, 10.0]);
    assert_sums_to_100(splitter.widths());
}

#[test]
fn test_drag_past_bound_with_uneven_neighbors_stays_in_bounds() {
    let mut splitter = test_splitter(
        3,
        SplitterOptions::default()
            .with_bounds(5.0, 90.0)
            .with_initial_widths([80.0, 10.0, 10.0]),
    );

    splitter.drag_begin(0);
    splitter.drag_move(150.0, 1000.0);

    assert_widths(splitter.widths(), &[85.0, 5.0, 10.0]);
}

#[test]
fn test_drag_only_touches_adjacent_panels() {
    let mut splitter = test_splitter(
        5,
        SplitterOptions::default().with_initial_widths([10.0, 20.0, 30.0, 25.0, 15.0]),
    );

    splitter.drag_begin(2);
    for delta in [13.0, -40.0, 7.5, 220.0, -3.25] {
        splitter.drag_move(delta, 640.0);
        let widths = splitter.widths();
        assert_eq!(widths[0], 10.0);
        assert_eq!(widths[1], 20.0);
        assert_eq!(widths[4], 15.0);
        assert_sums_to_100(widths);
    }
}

#[test]
fn test_moves_accumulate_against_previous_widths() {
    let mut splitter = test_splitter(2, SplitterOptions::default());

    splitter.drag_begin(0);
    for _ in 0..4 {
        splitter.drag_move(10.0, 1000.0);
    }

    assert_widths(splitter.widths(), &[54.0, 46.0]);
}

#[test]
fn test_unusable_geometry_is_ignored() {
    let (mut splitter, log) = recording_splitter(2, SplitterOptions::default());
    splitter.drag_begin(0);

    assert!(!splitter.drag_move(10.0, 0.0));
    assert!(!splitter.drag_move(10.0, -5.0));
    assert!(!splitter.drag_move(f64::NAN, 100.0));
    assert!(!splitter.drag_move(10.0, f64::INFINITY));

    assert_eq!(splitter.widths(), &[50.0, 50.0]);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_infeasible_bounds_keep_sum() {
    let mut splitter = test_splitter(3, SplitterOptions::default().with_bounds(40.0, 90.0));

    splitter.drag_begin(0);
    splitter.drag_move(30.0, 300.0);

    assert_sums_to_100(splitter.widths());
}

#[test]
fn test_out_of_bounds_initial_widths_snap_on_first_move() {
    let mut splitter = test_splitter(
        2,
        SplitterOptions::default().with_initial_widths(vec![2.0, 98.0]),
    );
    assert_eq!(splitter.widths(), &[2.0, 98.0]);

    // Pointer moves left, but the pair still lands on its bounds
    splitter.drag_begin(0);
    assert!(splitter.drag_move(-1.0, 1000.0));
    assert_widths(splitter.widths(), &[10.0, 90.0]);

    // From there drags follow the pointer again
    splitter.drag_move(100.0, 1000.0);
    assert_widths(splitter.widths(), &[20.0, 80.0]);
}

// ============================================================================
// Resize callback
// ============================================================================

#[test]
fn test_callback_sees_every_move() {
    let (mut splitter, log) = recording_splitter(3, SplitterOptions::default());

    splitter.drag_begin(1);
    splitter.drag_move(5.0, 500.0);
    splitter.drag_move(5.0, 500.0);
    splitter.drag_move(5.0, 500.0);
    splitter.drag_end();

    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert_eq!(log.last().map(Vec::as_slice), Some(splitter.widths()));
}

#[test]
fn test_callback_panic_leaves_state_consistent() {
    let mut splitter = test_splitter(
        2,
        SplitterOptions::default().with_initial_widths([50.0, 50.0]),
    )
    .on_resize(|_| panic!("callback failed"));

    splitter.drag_begin(0);
    let result = catch_unwind(AssertUnwindSafe(|| splitter.drag_move(100.0, 1000.0)));

    assert!(result.is_err());
    assert_widths(splitter.widths(), &[60.0, 40.0]);
    assert!(splitter.is_dragging());
    splitter.assert_invariants();
}

// ============================================================================
// Controlled mode
// ============================================================================

#[test]
fn test_controlled_mode_only_proposes() {
    let (mut splitter, log) = recording_splitter(
        2,
        SplitterOptions::default().with_mode(WidthsMode::Controlled),
    );

    splitter.drag_begin(0);
    assert!(splitter.drag_move(100.0, 1000.0));

    assert_eq!(splitter.widths(), &[50.0, 50.0]);
    let proposed = log.borrow()[0].clone();
    assert_widths(&proposed, &[60.0, 40.0]);

    assert!(splitter.set_widths(&proposed));
    assert_widths(splitter.widths(), &[60.0, 40.0]);
}

#[test]
fn test_set_widths_rejects_bad_input() {
    let mut splitter = test_splitter(3, SplitterOptions::default());
    let before = splitter.widths().to_vec();

    assert!(!splitter.set_widths(&[50.0, 50.0]));
    assert!(!splitter.set_widths(&[50.0, 30.0, 30.0]));
    assert!(!splitter.set_widths(&[-10.0, 60.0, 50.0]));

    assert_eq!(splitter.widths(), before.as_slice());
    assert!(splitter.set_widths(&[20.0, 30.0, 50.0]));
}

// ============================================================================
// Reset and hover
// ============================================================================

#[test]
fn test_reset_restores_initial_split() {
    let (mut splitter, log) = recording_splitter(
        3,
        SplitterOptions::default().with_initial_widths([30.0, 40.0, 30.0]),
    );
    assert!(!splitter.reset());

    splitter.drag_begin(0);
    splitter.drag_move(80.0, 1000.0);
    splitter.drag_end();

    assert!(splitter.reset());
    assert_eq!(splitter.widths(), &[30.0, 40.0, 30.0]);
    assert_eq!(log.borrow().last().cloned(), Some(vec![30.0, 40.0, 30.0]));
    assert!(!splitter.reset());
}

#[test]
fn test_handle_state_active_wins_over_hover() {
    let mut splitter = test_splitter(3, SplitterOptions::default());

    assert!(splitter.set_hovered(Some(1)));
    assert!(!splitter.set_hovered(Some(1)));
    assert_eq!(splitter.handle_state(0), HandleState::Idle);
    assert_eq!(splitter.handle_state(1), HandleState::Hovered);

    splitter.drag_begin(1);
    assert_eq!(splitter.handle_state(1), HandleState::Active);

    splitter.drag_end();
    assert_eq!(splitter.handle_state(1), HandleState::Hovered);
}

#[test]
fn test_hover_on_missing_handle_is_ignored() {
    let mut splitter = test_splitter(3, SplitterOptions::default());
    assert!(!splitter.set_hovered(Some(7)));
    assert_eq!(splitter.hovered_handle(), None);
}
