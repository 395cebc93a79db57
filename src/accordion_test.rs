use super::*;

#[test]
fn toggle_opens_then_closes() {
    let mut set = AccordionSet::new();
    let a = set.push(None, false);
    assert_eq!(set.toggle(a), vec![a]);
    assert!(set.is_open(a));
    set.toggle(a);
    assert!(!set.is_open(a));
}

#[test]
fn opening_in_group_closes_open_sibling() {
    let mut set = AccordionSet::new();
    let a = set.push(Some(0), false);
    let b = set.push(Some(0), false);
    set.toggle(a);
    let changed = set.toggle(b);
    assert!(!set.is_open(a));
    assert!(set.is_open(b));
    assert_eq!(changed, vec![a, b]);
}

#[test]
fn group_has_at_most_one_open() {
    let mut set = AccordionSet::new();
    let ids: Vec<usize> = (0..4).map(|_| set.push(Some(7), false)).collect();
    for &id in &[0, 2, 1, 3, 3, 0] {
        set.toggle(ids[id]);
        let open = ids.iter().filter(|i| set.is_open(**i)).count();
        assert!(open <= 1, "{open} open after toggling {id}");
    }
}

#[test]
fn different_groups_are_independent() {
    let mut set = AccordionSet::new();
    let a = set.push(Some(0), false);
    let b = set.push(Some(1), false);
    set.toggle(a);
    set.toggle(b);
    assert!(set.is_open(a));
    assert!(set.is_open(b));
}

#[test]
fn ungrouped_accordions_are_unaffected() {
    let mut set = AccordionSet::new();
    let loose_a = set.push(None, false);
    let loose_b = set.push(None, false);
    let grouped = set.push(Some(0), false);
    set.toggle(loose_a);
    set.toggle(loose_b);
    set.toggle(grouped);
    assert!(set.is_open(loose_a));
    assert!(set.is_open(loose_b));
    assert!(set.is_open(grouped));
}

#[test]
fn markup_open_state_is_respected() {
    let mut set = AccordionSet::new();
    let a = set.push(Some(0), true);
    let b = set.push(Some(0), false);
    assert!(set.is_open(a));
    set.toggle(b);
    assert!(!set.is_open(a));
}

#[test]
fn closing_reports_only_itself() {
    let mut set = AccordionSet::new();
    let a = set.push(Some(0), true);
    set.push(Some(0), false);
    assert_eq!(set.toggle(a), vec![a]);
}

#[test]
fn unknown_index_changes_nothing() {
    let mut set = AccordionSet::new();
    set.push(None, false);
    assert!(set.toggle(5).is_empty());
    assert!(!set.is_open(5));
}
