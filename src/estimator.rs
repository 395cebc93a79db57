//! Visible-item estimation for horizontal scroll containers.
//!
//! Given a container's scroll window and the layout of its children, pick
//! the child with the largest fraction of its own width inside the window.
//! Pure geometry; the DOM binding in [`crate::indicators`] feeds it
//! `offsetLeft`/`offsetWidth` readings.

#[cfg(test)]
#[path = "estimator_test.rs"]
mod estimator_test;

/// Layout of one item, in the container's scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    pub offset: f64,
    pub width: f64,
}

impl ItemMetrics {
    /// Stand-in for a child with no measurable layout.
    pub const EMPTY: Self = Self { offset: 0.0, width: 0.0 };

    #[must_use]
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }
}

/// The visible horizontal span of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub scroll_left: f64,
    pub width: f64,
}

impl ScrollWindow {
    #[must_use]
    pub fn new(scroll_left: f64, width: f64) -> Self {
        Self { scroll_left, width }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.scroll_left + self.width
    }
}

/// Fraction of `item` inside `window`, in `[0, 1]`.
///
/// `margin` is the container's leading padding; item offsets include it but
/// the scroll origin does not. Zero-width items count as not visible.
#[must_use]
pub fn visible_fraction(window: ScrollWindow, item: ItemMetrics, margin: f64) -> f64 {
    if item.width <= 0.0 || !item.width.is_finite() {
        return 0.0;
    }
    let left = item.offset - margin;
    let right = left + item.width;
    let visible = (right.min(window.right()) - left.max(window.scroll_left)).max(0.0);
    let fraction = visible / item.width;
    if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 }
}

/// Index of the most visible item.
///
/// Ties go to the lowest index (strict `>`). When nothing overlaps, or the
/// group is empty, the answer is 0.
#[must_use]
pub fn most_visible(window: ScrollWindow, items: &[ItemMetrics], margin: f64) -> usize {
    let mut best = 0;
    let mut best_fraction = 0.0;
    for (index, item) in items.iter().enumerate() {
        let fraction = visible_fraction(window, *item, margin);
        if fraction > best_fraction {
            best_fraction = fraction;
            best = index;
        }
    }
    best
}

/// `scrollLeft` that brings `item`'s leading edge to the window start.
#[must_use]
pub fn scroll_target(item: ItemMetrics, margin: f64) -> f64 {
    item.offset - margin
}
