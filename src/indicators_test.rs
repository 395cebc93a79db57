use super::*;

// =============================================================
// IndicatorState
// =============================================================

#[test]
fn single_item_group_has_no_indicators() {
    assert_eq!(IndicatorState::new(0), None);
    assert_eq!(IndicatorState::new(1), None);
}

#[test]
fn new_group_starts_on_first_dot() {
    let state = IndicatorState::new(3).unwrap();
    assert_eq!(state.dot_count(), 3);
    assert_eq!(state.active(), 0);
    assert_eq!(state.flags().collect::<Vec<_>>(), vec![true, false, false]);
}

#[test]
fn set_active_moves_the_only_active_dot() {
    let mut state = IndicatorState::new(4).unwrap();
    assert!(state.set_active(2));
    assert_eq!(state.flags().collect::<Vec<_>>(), vec![false, false, true, false]);
}

#[test]
fn set_active_same_index_reports_unchanged() {
    let mut state = IndicatorState::new(4).unwrap();
    state.set_active(1);
    assert!(!state.set_active(1));
    assert_eq!(state.active(), 1);
}

#[test]
fn set_active_clamps_out_of_range() {
    let mut state = IndicatorState::new(3).unwrap();
    state.set_active(99);
    assert_eq!(state.active(), 2);
}

#[test]
fn exactly_one_dot_active_after_any_update() {
    let mut state = IndicatorState::new(6).unwrap();
    for index in [0, 5, 3, 3, 1, 42, 0, 4] {
        state.set_active(index);
        assert_eq!(state.flags().filter(|f| *f).count(), 1, "after set_active({index})");
    }
}

// =============================================================
// SwipeRegistry
// =============================================================

#[test]
fn unflagged_container_is_claimed() {
    let mut registry = SwipeRegistry::new();
    assert_eq!(registry.claim(None), Some(1));
    assert_eq!(registry.claimed(), 1);
}

#[test]
fn flagged_container_is_not_claimed_again() {
    let mut registry = SwipeRegistry::new();
    let id = registry.claim(None).unwrap();
    let flag = id.to_string();
    assert_eq!(registry.claim(Some(&flag)), None);
    assert_eq!(registry.claimed(), 1);
}

#[test]
fn repeated_setup_yields_one_group_per_container() {
    // Simulates three grids whose guard flags persist between setup runs.
    let mut registry = SwipeRegistry::new();
    let mut flags: Vec<Option<String>> = vec![None, None, None];
    for _run in 0..3 {
        for flag in &mut flags {
            if let Some(id) = registry.claim(flag.as_deref()) {
                *flag = Some(id.to_string());
            }
        }
    }
    assert_eq!(registry.claimed(), 3);
    assert!(flags.iter().all(Option::is_some));
}

#[test]
fn group_ids_are_distinct() {
    let mut registry = SwipeRegistry::new();
    let a = registry.claim(None).unwrap();
    let b = registry.claim(None).unwrap();
    assert_ne!(a, b);
}

#[test]
fn hint_is_claimed_once() {
    let mut registry = SwipeRegistry::new();
    assert!(registry.claim_hint(false));
    assert!(!registry.claim_hint(false));
    assert!(!registry.claim_hint(false));
}

#[test]
fn hint_already_in_markup_is_not_duplicated() {
    let mut registry = SwipeRegistry::new();
    assert!(!registry.claim_hint(true));
    assert!(!registry.claim_hint(false));
}

#[test]
fn released_claim_lets_the_grid_be_retried() {
    // A grid whose setup failed before its flag was written stays unflagged.
    let mut registry = SwipeRegistry::new();
    let failed = registry.claim(None).unwrap();
    registry.release(failed);
    assert_eq!(registry.claimed(), 0);
    let retried = registry.claim(None).unwrap();
    assert_ne!(retried, failed);
    assert_eq!(registry.claimed(), 1);
}

#[test]
fn failed_grid_does_not_block_later_grids() {
    let mut registry = SwipeRegistry::new();
    let mut flags: Vec<Option<String>> = vec![None, None, None];
    for (position, flag) in flags.iter_mut().enumerate() {
        let Some(id) = registry.claim(flag.as_deref()) else {
            continue;
        };
        if position == 0 {
            registry.release(id);
        } else {
            *flag = Some(id.to_string());
        }
    }
    assert_eq!(registry.claimed(), 2);
    assert_eq!(flags[0], None);
    assert!(flags[1..].iter().all(Option::is_some));

    // Next run picks up the grid that failed.
    assert!(registry.claim(flags[0].as_deref()).is_some());
    assert_eq!(registry.claimed(), 3);
}
