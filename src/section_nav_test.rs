use super::*;

fn page(scroll_y: f64) -> PageScroll {
    PageScroll { scroll_y, viewport_height: 800.0, document_height: 6_000.0 }
}

#[test]
fn hidden_at_top() {
    assert!(!page(0.0).nav_visible());
    assert!(!page(400.0).nav_visible());
}

#[test]
fn visible_past_half_screen() {
    assert!(page(401.0).nav_visible());
    assert!(page(3_000.0).nav_visible());
}

#[test]
fn hidden_near_bottom() {
    // 6000 - 1.5 * 800 = 4800
    assert!(page(4_799.0).nav_visible());
    assert!(!page(4_800.0).nav_visible());
    assert!(!page(5_200.0).nav_visible());
}

#[test]
fn short_page_never_shows_nav() {
    let short = PageScroll { scroll_y: 500.0, viewport_height: 800.0, document_height: 1_200.0 };
    assert!(!short.nav_visible());
}

#[test]
fn section_covering_band_is_active() {
    assert!(page(0.0).section_active(-100.0, 700.0));
    assert!(page(0.0).section_active(400.0, 900.0));
}

#[test]
fn section_below_band_is_inactive() {
    assert!(!page(0.0).section_active(401.0, 1_200.0));
}

#[test]
fn section_above_band_is_inactive() {
    assert!(!page(0.0).section_active(-900.0, 239.0));
}
