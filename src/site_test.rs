#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn desktop_plan_skips_mobile_only_components() {
    let plan = startup_plan(false);
    assert!(plan.iter().all(|component| !component.mobile_only()));
    assert!(plan.contains(&Component::Theme));
    assert!(plan.contains(&Component::MobileMenu));
    assert!(!plan.contains(&Component::SwipeIndicators));
}

#[test]
fn mobile_plan_mounts_everything() {
    assert_eq!(startup_plan(true), Component::ALL.to_vec());
}

#[test]
fn theme_mounts_first() {
    assert_eq!(startup_plan(false).first(), Some(&Component::Theme));
    assert_eq!(startup_plan(true).first(), Some(&Component::Theme));
}

#[test]
fn resize_reruns_indicators_only_on_mobile() {
    assert_eq!(resize_plan(true), vec![Component::SwipeIndicators]);
    assert!(resize_plan(false).is_empty());
}

#[test]
fn component_names_are_unique() {
    let mut names: Vec<&str> = Component::ALL.iter().map(|c| c.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Component::ALL.len());
}

#[test]
fn site_uses_configured_breakpoint() {
    let mut config = SiteConfig::default();
    config.mobile_breakpoint_px = 600.0;
    let site = Site::new(config);
    assert!(site.is_mobile(600.0));
    assert!(!site.is_mobile(700.0));
    assert_eq!(site.config().mobile_breakpoint_px, 600.0);
}

#[test]
fn parsing_document_defers_mount() {
    assert!(!mount_now("loading"));
}

#[test]
fn parsed_document_mounts_immediately() {
    assert!(mount_now("interactive"));
    assert!(mount_now("complete"));
}
