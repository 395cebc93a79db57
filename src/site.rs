//! Startup wiring.
//!
//! [`Site`] is built once from the loaded [`SiteConfig`] and owns every
//! long-lived component. Mounting walks a [`Component`] plan for the current
//! viewport; each binding that fails or finds nothing to bind is reported and
//! skipped, and the rest still mount. Mounting waits for `DOMContentLoaded`
//! when the module starts before the body is parsed. A debounced resize
//! handler re-runs the swipe-indicator setup when the page is (or becomes)
//! mobile.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::consts::READY_STATE_LOADING;
use crate::viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Theme,
    Reveal,
    ActiveNav,
    NavFade,
    MobileMenu,
    SmoothScroll,
    SwipeIndicators,
    Accordions,
    SectionNav,
    TouchFeedback,
    RevealDistance,
}

impl Component {
    pub const ALL: [Self; 11] = [
        Self::Theme,
        Self::Reveal,
        Self::ActiveNav,
        Self::NavFade,
        Self::MobileMenu,
        Self::SmoothScroll,
        Self::SwipeIndicators,
        Self::Accordions,
        Self::SectionNav,
        Self::TouchFeedback,
        Self::RevealDistance,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Reveal => "reveal",
            Self::ActiveNav => "active-nav",
            Self::NavFade => "nav-fade",
            Self::MobileMenu => "mobile-menu",
            Self::SmoothScroll => "smooth-scroll",
            Self::SwipeIndicators => "swipe-indicators",
            Self::Accordions => "accordions",
            Self::SectionNav => "section-nav",
            Self::TouchFeedback => "touch-feedback",
            Self::RevealDistance => "reveal-distance",
        }
    }

    /// Mobile-layout enhancements are skipped on wider viewports.
    #[must_use]
    pub fn mobile_only(self) -> bool {
        matches!(
            self,
            Self::SwipeIndicators | Self::Accordions | Self::SectionNav | Self::TouchFeedback | Self::RevealDistance
        )
    }
}

/// Whether the document is parsed far enough to mount right away.
///
/// Only `"loading"` defers; `"interactive"` and `"complete"` both have a body.
#[must_use]
pub fn mount_now(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

/// Components to mount at load, in order.
#[must_use]
pub fn startup_plan(is_mobile: bool) -> Vec<Component> {
    Component::ALL
        .into_iter()
        .filter(|component| is_mobile || !component.mobile_only())
        .collect()
}

/// Components to re-run after a resize settles.
#[must_use]
pub fn resize_plan(is_mobile: bool) -> Vec<Component> {
    if is_mobile { vec![Component::SwipeIndicators] } else { Vec::new() }
}

pub struct Site {
    config: SiteConfig,
    #[cfg(feature = "hydrate")]
    indicators: crate::indicators::SwipeIndicators,
}

impl Site {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            indicators: crate::indicators::SwipeIndicators::new(&config),
            config,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn is_mobile(&self, width: f64) -> bool {
        viewport::is_mobile(width, self.config.mobile_breakpoint_px)
    }
}

#[cfg(feature = "hydrate")]
mod binding {
    use std::rc::Rc;

    use super::{Component, Site, mount_now, resize_plan, startup_plan};
    use crate::accordion::Accordions;
    use crate::consts::DOM_READY_EVENT;
    use crate::debounce::Debounced;
    use crate::dom;
    use crate::error::BindResult;
    use crate::menu::MobileMenu;
    use crate::nav::ActiveNav;
    use crate::nav_fade::NavFade;
    use crate::reveal::Reveal;
    use crate::section_nav::SectionNav;
    use crate::smooth_scroll::SmoothScroll;
    use crate::theme::ThemeBinding;
    use crate::touch::TouchFeedback;

    impl Site {
        /// Mount now if the body is parsed, otherwise on `DOMContentLoaded`.
        pub fn mount_when_ready(self) {
            let document = match dom::document() {
                Ok(document) => document,
                Err(err) => {
                    log::warn!("interactions: no document, nothing mounted: {err}");
                    return;
                }
            };
            let ready_state = document.ready_state();
            if mount_now(&ready_state) {
                self.mount();
                return;
            }
            log::debug!("interactions: document {ready_state}, waiting for {DOM_READY_EVENT}");
            let mut pending = Some(self);
            dom::report(
                "dom-ready",
                dom::listen(&document, DOM_READY_EVENT, move |_| {
                    if let Some(site) = pending.take() {
                        site.mount();
                    }
                }),
            );
        }

        /// Mount every component for the current viewport, then watch resizes.
        pub fn mount(self) {
            let site = Rc::new(self);
            let is_mobile = match site.current_is_mobile() {
                Ok(is_mobile) => is_mobile,
                Err(err) => {
                    log::warn!("interactions: viewport read failed, assuming desktop: {err}");
                    false
                }
            };
            let plan = startup_plan(is_mobile);
            log::debug!("interactions: mounting {} components (mobile: {is_mobile})", plan.len());
            for component in plan {
                dom::report(component.name(), site.mount_component(component, is_mobile));
            }
            dom::report("resize", Self::watch_resize(&site));
        }

        fn current_is_mobile(&self) -> BindResult<bool> {
            let window = dom::window()?;
            Ok(self.is_mobile(dom::inner_width(&window)?))
        }

        fn mount_component(&self, component: Component, is_mobile: bool) -> BindResult {
            match component {
                Component::Theme => ThemeBinding::mount(&self.config),
                Component::Reveal => Reveal::mount(&self.config),
                Component::ActiveNav => ActiveNav::mount(&self.config),
                Component::NavFade => NavFade::mount(),
                Component::MobileMenu => MobileMenu::mount(&self.config),
                Component::SmoothScroll => SmoothScroll::mount(&self.config),
                Component::SwipeIndicators => self.indicators.setup(),
                Component::Accordions => Accordions::mount(),
                Component::SectionNav => SectionNav::mount(),
                Component::TouchFeedback => TouchFeedback::mount(),
                Component::RevealDistance => Reveal::tune_for_viewport(is_mobile),
            }
        }

        fn watch_resize(site: &Rc<Self>) -> BindResult {
            let window = dom::window()?;
            let debounce = Debounced::new(site.config.resize_debounce_ms);
            let site = Rc::clone(site);
            dom::listen(&window, "resize", move |_| {
                let site = Rc::clone(&site);
                debounce.trigger(move || {
                    let is_mobile = match site.current_is_mobile() {
                        Ok(is_mobile) => is_mobile,
                        Err(err) => {
                            log::warn!("interactions: viewport read failed: {err}");
                            return;
                        }
                    };
                    for component in resize_plan(is_mobile) {
                        dom::report(component.name(), site.mount_component(component, is_mobile));
                    }
                });
            })
        }
    }
}
