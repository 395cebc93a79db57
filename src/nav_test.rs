use super::*;

#[test]
fn matching_link_is_active() {
    assert!(link_is_active(Some("pricing"), "pricing"));
}

#[test]
fn other_links_are_cleared() {
    assert!(!link_is_active(Some("science"), "pricing"));
}

#[test]
fn link_without_section_is_never_active() {
    assert!(!link_is_active(None, "pricing"));
}

#[test]
fn at_most_one_link_per_section() {
    let links = [Some("hero"), Some("science"), Some("pricing"), None];
    assert_eq!(active_links(&links, "science"), vec![false, true, false, false]);
}

#[test]
fn unknown_section_clears_all() {
    let links = [Some("hero"), Some("science")];
    assert_eq!(active_links(&links, "faq"), vec![false, false]);
}

#[test]
fn later_entry_in_batch_wins() {
    // Two sections intersect in one frame; each entry rewrites every link.
    let links = [Some("hero"), Some("science")];
    let flags = ["hero", "science"]
        .iter()
        .fold(vec![false; links.len()], |_, section| active_links(&links, section));
    assert_eq!(flags, vec![false, true]);
}
