//! Scroll reveal.
//!
//! Elements tagged `.reveal` or `.stagger-children` gain `visible` the first
//! time enough of them enters the viewport, and are then unobserved; the
//! class is never taken away. On mobile the travel distance of the reveal
//! transition is shortened through a CSS custom property.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::MOBILE_REVEAL_DISTANCE;

/// One report from the reveal observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// One-shot rule: reveal on the first report showing at least `threshold` of
/// the element.
///
/// The observer's initial report flags any overlap as intersecting, so the
/// ratio is checked as well.
#[must_use]
pub fn should_reveal(sighting: Sighting, threshold: f64, already_visible: bool) -> bool {
    sighting.is_intersecting && sighting.ratio >= threshold && !already_visible
}

/// `--reveal-distance` override for the current layout, if any.
#[must_use]
pub fn distance_override(is_mobile: bool) -> Option<&'static str> {
    is_mobile.then_some(MOBILE_REVEAL_DISTANCE)
}

#[cfg(feature = "hydrate")]
pub use binding::Reveal;

#[cfg(feature = "hydrate")]
mod binding {
    use super::{Sighting, distance_override, should_reveal};
    use crate::config::SiteConfig;
    use crate::consts::{REVEAL_DISTANCE_PROP, REVEAL_ONLY_SELECTOR, REVEAL_SELECTOR, VISIBLE_CLASS};
    use crate::dom;
    use crate::error::BindResult;

    pub struct Reveal;

    impl Reveal {
        pub fn mount(config: &SiteConfig) -> BindResult {
            let document = dom::document()?;
            let threshold = config.reveal_threshold;
            let observer = dom::intersection_observer(threshold, None, move |entries, observer| {
                for entry in entries {
                    let target = entry.target();
                    let sighting = Sighting {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if should_reveal(sighting, threshold, dom::has_class(&target, VISIBLE_CLASS)) {
                        if let Err(err) = dom::set_class(&target, VISIBLE_CLASS, true) {
                            log::warn!("interactions: reveal failed: {err}");
                        }
                        observer.unobserve(&target);
                    }
                }
            })?;
            let targets = dom::query_all(&document, REVEAL_SELECTOR)?;
            for target in &targets {
                observer.observe(target);
            }
            log::debug!("interactions: observing {} reveal targets", targets.len());
            Ok(())
        }

        /// Shorten reveal travel on small screens.
        pub fn tune_for_viewport(is_mobile: bool) -> BindResult {
            let Some(distance) = distance_override(is_mobile) else {
                return Ok(());
            };
            let document = dom::document()?;
            for element in dom::query_all(&document, REVEAL_ONLY_SELECTOR)? {
                dom::as_html(&element)?.style().set_property(REVEAL_DISTANCE_PROP, distance)?;
            }
            Ok(())
        }
    }
}
