#![allow(clippy::float_cmp)]

use super::*;

const MARGIN: f64 = 24.0;

/// `count` items of `width`, laid out back to back after the leading margin.
fn row(count: usize, width: f64) -> Vec<ItemMetrics> {
    (0..count)
        .map(|i| ItemMetrics::new(MARGIN + width * i as f64, width))
        .collect()
}

// --- visible_fraction ---

#[test]
fn fraction_full_when_item_fills_window() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(100.0, 100.0);
    assert_eq!(visible_fraction(window, items[1], MARGIN), 1.0);
}

#[test]
fn fraction_half_when_half_overlaps() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(150.0, 100.0);
    assert_eq!(visible_fraction(window, items[1], MARGIN), 0.5);
    assert_eq!(visible_fraction(window, items[2], MARGIN), 0.5);
}

#[test]
fn fraction_zero_when_disjoint() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(150.0, 100.0);
    assert_eq!(visible_fraction(window, items[0], MARGIN), 0.0);
}

#[test]
fn fraction_clamped_for_item_narrower_than_window() {
    let item = ItemMetrics::new(MARGIN + 10.0, 50.0);
    let window = ScrollWindow::new(0.0, 300.0);
    assert_eq!(visible_fraction(window, item, MARGIN), 1.0);
}

#[test]
fn fraction_zero_for_zero_width_item() {
    let item = ItemMetrics::new(MARGIN, 0.0);
    let window = ScrollWindow::new(0.0, 300.0);
    assert_eq!(visible_fraction(window, item, MARGIN), 0.0);
}

// --- most_visible ---

#[test]
fn first_item_wins_at_rest() {
    let items = row(4, 300.0);
    assert_eq!(most_visible(ScrollWindow::new(0.0, 320.0), &items, MARGIN), 0);
}

#[test]
fn fully_visible_item_wins() {
    let items = row(5, 200.0);
    for k in 0..items.len() {
        let window = ScrollWindow::new(scroll_target(items[k], MARGIN), 200.0);
        assert_eq!(most_visible(window, &items, MARGIN), k, "item {k} fills the window");
    }
}

#[test]
fn tie_goes_to_lower_index() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(150.0, 100.0);
    assert_eq!(most_visible(window, &items, MARGIN), 1);
}

#[test]
fn larger_overlap_beats_earlier_item() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(170.0, 100.0);
    // item1 shows 30%, item2 shows 70%.
    assert_eq!(most_visible(window, &items, MARGIN), 2);
}

#[test]
fn no_overlap_falls_back_to_zero() {
    let items = row(3, 100.0);
    let window = ScrollWindow::new(5_000.0, 100.0);
    assert_eq!(most_visible(window, &items, MARGIN), 0);
}

#[test]
fn unmeasured_item_keeps_its_slot() {
    let mut items = row(3, 200.0);
    let last = items[2];
    items[1] = ItemMetrics::EMPTY;
    let window = ScrollWindow::new(scroll_target(last, MARGIN), 200.0);
    assert_eq!(most_visible(window, &items, MARGIN), 2);
    assert_eq!(visible_fraction(window, ItemMetrics::EMPTY, MARGIN), 0.0);
}

#[test]
fn empty_group_is_zero() {
    assert_eq!(most_visible(ScrollWindow::new(0.0, 100.0), &[], MARGIN), 0);
}

#[test]
fn index_always_in_range() {
    for count in 1..6 {
        let items = row(count, 180.0);
        let mut scroll = -200.0;
        while scroll < 180.0 * count as f64 + 200.0 {
            for width in [90.0, 180.0, 400.0] {
                let index = most_visible(ScrollWindow::new(scroll, width), &items, MARGIN);
                assert!(index < count, "index {index} out of range for {count} items");
            }
            scroll += 7.5;
        }
    }
}

#[test]
fn uneven_widths_pick_by_fraction_not_pixels() {
    // A wide card showing 150px (30%) loses to a narrow one fully shown.
    let items = vec![
        ItemMetrics::new(MARGIN, 500.0),
        ItemMetrics::new(MARGIN + 500.0, 100.0),
    ];
    let window = ScrollWindow::new(350.0, 250.0);
    assert_eq!(most_visible(window, &items, MARGIN), 1);
}

// --- scroll_target ---

#[test]
fn scroll_target_subtracts_margin() {
    assert_eq!(scroll_target(ItemMetrics::new(324.0, 280.0), MARGIN), 300.0);
}
