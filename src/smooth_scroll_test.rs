#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn hash_href_names_target() {
    assert_eq!(anchor_target_id("#pricing"), Some("pricing"));
}

#[test]
fn bare_hash_names_nothing() {
    assert_eq!(anchor_target_id("#"), None);
}

#[test]
fn external_href_names_nothing() {
    assert_eq!(anchor_target_id("/science#method"), None);
    assert_eq!(anchor_target_id("https://example.com"), None);
}

#[test]
fn scroll_stops_below_header() {
    assert_eq!(scroll_top(1_200.0, 80.0), 1_120.0);
}

#[test]
fn target_near_top_may_go_negative() {
    // The browser clamps negative scroll positions to 0.
    assert_eq!(scroll_top(40.0, 80.0), -40.0);
}

#[test]
fn measured_target_is_taken_over() {
    let destination = scroll_destination("#pricing", 80.0, |id| (id == "pricing").then_some(900.0));
    assert_eq!(destination, Some(820.0));
}

#[test]
fn unmeasurable_target_keeps_default_jump() {
    // Missing ids and non-HTML targets such as `<svg id=..>` both resolve to nothing.
    assert_eq!(scroll_destination("#diagram", 80.0, |_| None), None);
}

#[test]
fn bare_hash_never_looks_anything_up() {
    let mut looked_up = false;
    let destination = scroll_destination("#", 80.0, |_| {
        looked_up = true;
        Some(0.0)
    });
    assert_eq!(destination, None);
    assert!(!looked_up);
}
