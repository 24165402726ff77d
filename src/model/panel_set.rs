//! Panel widths - percentage allocation across N panels
//!
//! Widths are percentages of the flexible track and always sum to 100.
//! A drag only ever touches the pair of panels on either side of the
//! dragged handle, so the total is conserved by conserving the pair sum.

use serde::{Deserialize, Serialize};

/// Default minimum width of a panel (percent)
pub const DEFAULT_MIN_WIDTH: f64 = 5.0;

/// Default maximum width of a panel (percent)
pub const DEFAULT_MAX_WIDTH: f64 = 90.0;

/// Tolerance used when checking that widths add up to 100
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Uniform per-panel width bounds, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WIDTH,
            max: DEFAULT_MAX_WIDTH,
        }
    }
}

impl WidthBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a width into `[min, max]`
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// First width outside the bounds, with its index
    pub fn first_outside(&self, widths: &[f64]) -> Option<(usize, f64)> {
        widths
            .iter()
            .copied()
            .enumerate()
            .find(|(_, w)| !self.contains(*w))
    }

    /// Whether `count` panels can all sit inside the bounds while summing to 100
    pub fn is_feasible(&self, count: usize) -> bool {
        if count == 0 {
            return true;
        }
        let n = count as f64;
        self.min > 0.0
            && self.min <= self.max
            && self.max <= 100.0
            && self.min * n <= 100.0 + SUM_TOLERANCE
            && self.max * n >= 100.0 - SUM_TOLERANCE
    }
}

/// Equal split of 100 percent across `count` panels.
///
/// Every entry is `100 / count` except the last, which takes the remainder so
/// the entries add up to exactly 100.
pub fn equal_widths(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let share = 100.0 / count as f64;
    let mut widths = vec![share; count];
    let others: f64 = widths[..count - 1].iter().sum();
    widths[count - 1] = 100.0 - others;
    widths
}

/// Check that `widths` is a usable allocation for `count` panels
pub fn validate_widths(widths: &[f64], count: usize) -> Result<(), String> {
    if widths.len() != count {
        return Err(format!(
            "expected {} widths, got {}",
            count,
            widths.len()
        ));
    }
    if let Some(bad) = widths.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(format!("invalid width {}", bad));
    }
    let total: f64 = widths.iter().sum();
    if count > 0 && (total - 100.0).abs() > SUM_TOLERANCE {
        return Err(format!("widths sum to {} instead of 100", total));
    }
    Ok(())
}

/// Move the boundary between two adjacent panels by `delta` percent.
///
/// The left panel grows by `delta` and the right one shrinks by it. The delta
/// is first limited to the range that keeps both panels inside `bounds`. Each
/// side is then clamped on its own, and any drift the clamping introduced in
/// the pair total is split evenly between the two, so `left + right` is
/// conserved.
///
/// A pair that starts outside the bounds snaps back inside on the first move,
/// whatever the sign of `delta`: the allowed range no longer contains zero.
/// With bounds `[5, 90]`, `[2, 98]` becomes `[10, 90]` even for a small
/// negative delta. When no delta can put both inside, only the
/// clamp-and-split step applies.
pub fn resize_pair(left: f64, right: f64, delta: f64, bounds: WidthBounds) -> (f64, f64) {
    let lowest = (bounds.min - left).max(right - bounds.max);
    let highest = (bounds.max - left).min(right - bounds.min);
    // Rounding in the stored widths can leave the range inverted by a hair
    let delta = if lowest <= highest + SUM_TOLERANCE {
        delta.clamp(lowest, highest.max(lowest))
    } else {
        delta
    };

    let new_left = bounds.clamp(left + delta);
    let new_right = bounds.clamp(right - delta);

    let drift = (new_left + new_right) - (left + right);
    (new_left - drift / 2.0, new_right - drift / 2.0)
}

/// Ordered panel widths together with their bounds
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSet {
    widths: Vec<f64>,
    bounds: WidthBounds,
}

impl PanelSet {
    /// Equal split across `count` panels
    pub fn equal(count: usize, bounds: WidthBounds) -> Self {
        Self {
            widths: equal_widths(count),
            bounds,
        }
    }

    /// Build from caller-supplied initial widths, falling back to an equal
    /// split when they are missing or unusable.
    pub fn from_initial(count: usize, initial: Option<&[f64]>, bounds: WidthBounds) -> Self {
        if !bounds.is_feasible(count) {
            tracing::warn!(
                "Width bounds [{}, {}] cannot hold {} panels summing to 100",
                bounds.min,
                bounds.max,
                count
            );
        }

        // A single panel always takes everything
        if count == 1 {
            return Self::equal(count, bounds);
        }

        match initial {
            Some(widths) if widths.len() == count => match validate_widths(widths, count) {
                Ok(()) => {
                    if let Some((index, width)) = bounds.first_outside(widths) {
                        tracing::warn!(
                            "Initial width {} of panel {} is outside [{}, {}]; \
                             the first drag will snap it into bounds",
                            width,
                            index,
                            bounds.min,
                            bounds.max
                        );
                    }
                    Self {
                        widths: widths.to_vec(),
                        bounds,
                    }
                }
                Err(e) => {
                    tracing::warn!("Ignoring initial widths ({}), using equal split", e);
                    Self::equal(count, bounds)
                }
            },
            Some(widths) => {
                tracing::debug!(
                    "Initial widths length {} does not match {} panels, using equal split",
                    widths.len(),
                    count
                );
                Self::equal(count, bounds)
            }
            None => Self::equal(count, bounds),
        }
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Number of handles between the panels
    pub fn handle_count(&self) -> usize {
        self.widths.len().saturating_sub(1)
    }

    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Widths after moving handle `handle_index` by `delta` percent, without
    /// committing them. `None` if the handle does not exist.
    pub fn resized(&self, handle_index: usize, delta: f64) -> Option<Vec<f64>> {
        if handle_index >= self.handle_count() {
            return None;
        }
        let mut widths = self.widths.clone();
        let (left, right) = resize_pair(
            widths[handle_index],
            widths[handle_index + 1],
            delta,
            self.bounds,
        );
        widths[handle_index] = left;
        widths[handle_index + 1] = right;
        Some(widths)
    }

    /// Move handle `handle_index` by `delta` percent in place
    pub fn apply_delta(&mut self, handle_index: usize, delta: f64) -> bool {
        if handle_index >= self.handle_count() {
            return false;
        }
        let (left, right) = resize_pair(
            self.widths[handle_index],
            self.widths[handle_index + 1],
            delta,
            self.bounds,
        );
        self.widths[handle_index] = left;
        self.widths[handle_index + 1] = right;
        true
    }

    /// Replace all widths, rejecting allocations of the wrong shape
    pub fn replace(&mut self, widths: &[f64]) -> Result<(), String> {
        validate_widths(widths, self.widths.len())?;
        self.widths.clear();
        self.widths.extend_from_slice(widths);
        Ok(())
    }
}
