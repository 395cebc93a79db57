//! Active nav link.
//!
//! Each `section[id]` is watched; when one crosses the threshold inside the
//! header-adjusted root margin, every `.nav-center a[data-section]` link is
//! re-evaluated against that section's id. Entries in the same batch are
//! handled in order, each updating the links on its own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether a link pointing at `link_section` is active once `section_id` intersects.
#[must_use]
pub fn link_is_active(link_section: Option<&str>, section_id: &str) -> bool {
    link_section == Some(section_id)
}

/// Active flags for `links` after `section_id` reports intersecting.
#[must_use]
pub fn active_links(links: &[Option<&str>], section_id: &str) -> Vec<bool> {
    links.iter().map(|link| link_is_active(*link, section_id)).collect()
}

#[cfg(feature = "hydrate")]
pub use binding::ActiveNav;

#[cfg(feature = "hydrate")]
mod binding {
    use super::active_links;
    use crate::config::SiteConfig;
    use crate::consts::{ACTIVE_CLASS, NAV_LINK_SECTION_ATTR, NAV_LINK_SELECTOR, SECTION_SELECTOR};
    use crate::dom;
    use crate::error::{BindError, BindResult};

    pub struct ActiveNav;

    impl ActiveNav {
        pub fn mount(config: &SiteConfig) -> BindResult {
            let document = dom::document()?;
            let links = dom::query_all(&document, NAV_LINK_SELECTOR)?;
            if links.is_empty() {
                return Err(BindError::MissingAnchor(NAV_LINK_SELECTOR));
            }

            let margin = Some(config.nav_root_margin.as_str());
            let observer = dom::intersection_observer(config.nav_threshold, margin, move |entries, _| {
                for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
                    let Some(id) = entry.target().get_attribute("id") else {
                        continue;
                    };
                    let targets: Vec<Option<String>> =
                        links.iter().map(|link| link.get_attribute(NAV_LINK_SECTION_ATTR)).collect();
                    let targets: Vec<Option<&str>> = targets.iter().map(Option::as_deref).collect();
                    for (link, active) in links.iter().zip(active_links(&targets, &id)) {
                        if let Err(err) = dom::set_class(link, ACTIVE_CLASS, active) {
                            log::warn!("interactions: nav link update failed: {err}");
                        }
                    }
                }
            })?;
            for section in dom::query_all(&document, SECTION_SELECTOR)? {
                observer.observe(&section);
            }
            Ok(())
        }
    }
}
