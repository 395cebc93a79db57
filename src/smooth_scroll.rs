//! Smooth scrolling for in-page anchors.
//!
//! A click on `a[href^="#"]` whose target exists is taken over: the default
//! jump is cancelled and the window glides to the target, stopping short by
//! the fixed header height. Links to missing or non-HTML targets keep
//! default behavior.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Element id referenced by an in-page `href`, if any.
///
/// A bare `#` names no element.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window `scrollY` that puts a target at `offset_top` just below the header.
#[must_use]
pub fn scroll_top(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Window `scrollY` to glide to for a click on `href`, or `None` to leave the
/// click to the browser.
///
/// `offset_top` looks an id up and yields its target's `offsetTop`, or `None`
/// when there is no measurable target.
pub fn scroll_destination(
    href: &str,
    header_offset: f64,
    offset_top: impl FnOnce(&str) -> Option<f64>,
) -> Option<f64> {
    let top = anchor_target_id(href).and_then(offset_top)?;
    Some(scroll_top(top, header_offset))
}

#[cfg(feature = "hydrate")]
pub use binding::SmoothScroll;

#[cfg(feature = "hydrate")]
mod binding {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

    use super::scroll_destination;
    use crate::config::SiteConfig;
    use crate::consts::ANCHOR_LINK_SELECTOR;
    use crate::dom;
    use crate::error::BindResult;

    pub struct SmoothScroll;

    impl SmoothScroll {
        pub fn mount(config: &SiteConfig) -> BindResult {
            let window = dom::window()?;
            let document = dom::document()?;
            let header_offset = config.header_offset_px;
            for link in dom::query_all(&document, ANCHOR_LINK_SELECTOR)? {
                let window = window.clone();
                let document = document.clone();
                let source = link.clone();
                dom::listen(&link, "click", move |event| {
                    follow(&window, &document, &source, &event, header_offset);
                })?;
            }
            Ok(())
        }
    }

    fn follow(window: &Window, document: &Document, link: &Element, event: &Event, header_offset: f64) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let destination = scroll_destination(&href, header_offset, |id| {
            let target = document.get_element_by_id(id)?;
            let target = target.dyn_ref::<HtmlElement>()?;
            Some(f64::from(target.offset_top()))
        });
        let Some(top) = destination else {
            return;
        };
        event.prevent_default();
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
