//! Mobile section nav.
//!
//! A compact `.mobile-section-nav` bar appears once the reader is half a
//! screen into the page and hides again near the bottom. Its k-th link is
//! active while the k-th `section[id]` straddles the middle band of the
//! viewport.

#[cfg(test)]
#[path = "section_nav_test.rs"]
mod section_nav_test;

/// Page-level scroll geometry read on each window scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScroll {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl PageScroll {
    /// Shown past half a screen, hidden in the last screen and a half.
    #[must_use]
    pub fn nav_visible(&self) -> bool {
        self.scroll_y > self.viewport_height * 0.5
            && self.scroll_y < self.document_height - self.viewport_height * 1.5
    }

    /// A section with rect `top..bottom` covers the 30%–50% viewport band.
    #[must_use]
    pub fn section_active(&self, top: f64, bottom: f64) -> bool {
        top <= self.viewport_height * 0.5 && bottom >= self.viewport_height * 0.3
    }
}

#[cfg(feature = "hydrate")]
pub use binding::SectionNav;

#[cfg(feature = "hydrate")]
mod binding {
    use web_sys::{Document, Element, Window};

    use super::PageScroll;
    use crate::consts::{ACTIVE_CLASS, SECTION_NAV_SELECTOR, SECTION_SELECTOR, VISIBLE_CLASS};
    use crate::dom;
    use crate::error::{BindError, BindResult};

    pub struct SectionNav;

    impl SectionNav {
        pub fn mount() -> BindResult {
            let window = dom::window()?;
            let document = dom::document()?;
            let nav = dom::require(&document, SECTION_NAV_SELECTOR)?;
            let sections = dom::query_all(&document, SECTION_SELECTOR)?;
            let links = dom::query_all_in(&nav, "a")?;

            let target = window.clone();
            dom::listen_passive(&target, "scroll", move |_| {
                if let Err(err) = update(&window, &document, &nav, &sections, &links) {
                    log::warn!("interactions: section nav update failed: {err}");
                }
            })
        }
    }

    fn update(window: &Window, document: &Document, nav: &Element, sections: &[Element], links: &[Element]) -> BindResult {
        let root = document.document_element().ok_or(BindError::MissingAnchor("html"))?;
        let page = PageScroll {
            scroll_y: window.scroll_y()?,
            viewport_height: dom::inner_height(window)?,
            document_height: f64::from(root.scroll_height()),
        };
        dom::set_class(nav, VISIBLE_CLASS, page.nav_visible())?;
        for (section, link) in sections.iter().zip(links) {
            let rect = section.get_bounding_client_rect();
            dom::set_class(link, ACTIVE_CLASS, page.section_active(rect.top(), rect.bottom()))?;
        }
        Ok(())
    }
}
