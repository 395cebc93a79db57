//! Viewport classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widths at or below `breakpoint` get the mobile layout.
#[must_use]
pub fn is_mobile(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}
