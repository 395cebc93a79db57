use super::*;

const THRESHOLD: f64 = 0.12;

fn seen(ratio: f64) -> Sighting {
    Sighting { is_intersecting: ratio > 0.0, ratio }
}

#[test]
fn reveals_on_first_intersection() {
    assert!(should_reveal(seen(0.5), THRESHOLD, false));
}

#[test]
fn reveals_exactly_at_threshold() {
    assert!(should_reveal(seen(THRESHOLD), THRESHOLD, false));
}

#[test]
fn sliver_on_initial_report_is_not_enough() {
    // The first callback after `observe` marks any overlap as intersecting.
    assert!(!should_reveal(seen(0.03), THRESHOLD, false));
}

#[test]
fn never_reveals_twice() {
    assert!(!should_reveal(seen(1.0), THRESHOLD, true));
}

#[test]
fn leaving_viewport_does_not_hide() {
    // A non-intersecting report is never a reason to touch the class.
    assert!(!should_reveal(seen(0.0), THRESHOLD, true));
    assert!(!should_reveal(seen(0.0), THRESHOLD, false));
}

#[test]
fn mobile_gets_short_distance() {
    assert_eq!(distance_override(true), Some("20px"));
}

#[test]
fn desktop_keeps_stylesheet_distance() {
    assert_eq!(distance_override(false), None);
}
