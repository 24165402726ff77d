//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use panesplit::config::{DemoPanel, SplitterConfig};
use panesplit::model::{AppModel, PanelSplitter, SplitterOptions};
use panesplit::theme::Theme;

/// Tolerance for comparing widths in assertions
pub const EPSILON: f64 = 1e-9;

/// Every resize notification, in order
pub type ResizeLog = Rc<RefCell<Vec<Vec<f64>>>>;

/// Splitter over `count` numbered panels with the given options
pub fn test_splitter(count: usize, options: SplitterOptions) -> PanelSplitter<usize> {
    PanelSplitter::new((0..count).collect(), options)
}

/// Splitter that records every resize notification into the returned log
pub fn recording_splitter(
    count: usize,
    options: SplitterOptions,
) -> (PanelSplitter<usize>, ResizeLog) {
    let log: ResizeLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let splitter = test_splitter(count, options)
        .on_resize(move |widths| sink.borrow_mut().push(widths.to_vec()));
    (splitter, log)
}

/// Assert two width lists are equal within `EPSILON`
pub fn assert_widths(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "widths {:?} vs expected {:?}",
        actual,
        expected
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < EPSILON,
            "width {} is {} (expected {}); widths {:?}",
            i,
            a,
            e,
            actual
        );
    }
}

/// Assert widths add up to 100
pub fn assert_sums_to_100(widths: &[f64]) {
    let total: f64 = widths.iter().sum();
    assert!(
        (total - 100.0).abs() < 1e-6,
        "widths {:?} sum to {}",
        widths,
        total
    );
}

/// Demo model with `count` panels in an 800x600 window and the default theme
pub fn test_model(count: usize) -> AppModel {
    let config = SplitterConfig {
        panels: (0..count)
            .map(|i| DemoPanel::new(format!("Panel {}", i + 1)))
            .collect(),
        ..SplitterConfig::default()
    };
    let mut model = AppModel::new(config, 800, 600);
    model.theme = Theme::default();
    model
}

/// Center of handle `index` in the model's current layout
pub fn handle_center(model: &AppModel, index: usize) -> (f64, f64) {
    let layout = model.layout();
    let rect = layout.handles[index].rect;
    (
        (rect.x + rect.width / 2.0) as f64,
        (rect.y + rect.height / 2.0) as f64,
    )
}
