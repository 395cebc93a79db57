//! Nav fade-in for pages without a hero.
//!
//! Hero pages animate the nav from their own stylesheet. Everywhere else the
//! nav starts hidden and slightly raised, and settles into place two frames
//! after load so the starting style is painted first.

#[cfg(test)]
#[path = "nav_fade_test.rs"]
mod nav_fade_test;

use crate::consts::{NAV_FADE_OFFSET, NAV_FADE_TRANSITION};

/// Inline style values for one end of the fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const FADE_FROM: FadeStyle = FadeStyle { opacity: "0", transform: NAV_FADE_OFFSET };
pub const FADE_TO: FadeStyle = FadeStyle { opacity: "1", transform: "translateY(0)" };
pub const FADE_TRANSITION: &str = NAV_FADE_TRANSITION;

/// Fade only when the nav has no inline animation and the page has no hero.
#[must_use]
pub fn should_fade(inline_animation: &str, has_hero: bool) -> bool {
    inline_animation.is_empty() && !has_hero
}

#[cfg(feature = "hydrate")]
pub use binding::NavFade;

#[cfg(feature = "hydrate")]
mod binding {
    use web_sys::HtmlElement;

    use super::{FADE_FROM, FADE_TO, FADE_TRANSITION, FadeStyle, should_fade};
    use crate::consts::{HERO_SELECTOR, NAV_SELECTOR};
    use crate::dom;
    use crate::error::BindResult;

    pub struct NavFade;

    impl NavFade {
        pub fn mount() -> BindResult {
            let window = dom::window()?;
            let document = dom::document()?;
            let nav = dom::as_html(&dom::require(&document, NAV_SELECTOR)?)?;
            let inline_animation = nav.style().get_property_value("animation")?;
            let has_hero = dom::query(&document, HERO_SELECTOR)?.is_some();
            if !should_fade(&inline_animation, has_hero) {
                return Ok(());
            }

            set_style(&nav, FADE_FROM)?;
            nav.style().set_property("transition", FADE_TRANSITION)?;

            let second_frame_window = window.clone();
            dom::next_frame(&window, move || {
                let settle = dom::next_frame(&second_frame_window, move || {
                    if let Err(err) = set_style(&nav, FADE_TO) {
                        log::warn!("interactions: nav fade failed: {err}");
                    }
                });
                if let Err(err) = settle {
                    log::warn!("interactions: nav fade scheduling failed: {err}");
                }
            })
        }
    }

    fn set_style(nav: &HtmlElement, style: FadeStyle) -> BindResult {
        let css = nav.style();
        css.set_property("opacity", style.opacity)?;
        css.set_property("transform", style.transform)?;
        Ok(())
    }
}
