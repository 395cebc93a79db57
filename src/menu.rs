//! Mobile hamburger menu.
//!
//! The menu is a single open/closed flag. Only the button toggles it; an
//! overlay tap, a tap on any link inside the menu, Escape, or the viewport
//! growing past the mobile breakpoint all force it closed.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    ButtonClick,
    OverlayClick,
    LinkClick,
    Escape,
    Resize { width: f64 },
}

impl MenuEvent {
    /// Map a `KeyboardEvent.key` value to a menu event.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        matches!(key, "Escape" | "Esc").then_some(Self::Escape)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    open: bool,
    breakpoint: f64,
}

impl MenuState {
    #[must_use]
    pub fn new(breakpoint: f64) -> Self {
        Self { open: false, breakpoint }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply `event`; returns `true` if the open state changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::ButtonClick => !self.open,
            MenuEvent::OverlayClick | MenuEvent::LinkClick | MenuEvent::Escape => false,
            MenuEvent::Resize { width } if !viewport::is_mobile(width, self.breakpoint) => false,
            MenuEvent::Resize { .. } => self.open,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

#[cfg(feature = "hydrate")]
pub use binding::MobileMenu;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, KeyboardEvent};

    use super::{MenuEvent, MenuState};
    use crate::config::SiteConfig;
    use crate::consts::{
        MENU_BODY_CLASS, MENU_BUTTON_SELECTOR, MENU_LINK_SELECTOR, MENU_NAV_SELECTOR, MENU_OVERLAY_SELECTOR, OPEN_CLASS,
    };
    use crate::dom;
    use crate::error::BindResult;

    struct MenuDom {
        button: Element,
        nav: Element,
        overlay: Option<Element>,
        body: Option<HtmlElement>,
    }

    impl MenuDom {
        fn render(&self, open: bool) -> BindResult {
            dom::set_class(&self.button, OPEN_CLASS, open)?;
            self.button.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
            dom::set_class(&self.nav, OPEN_CLASS, open)?;
            if let Some(overlay) = &self.overlay {
                dom::set_class(overlay, OPEN_CLASS, open)?;
            }
            if let Some(body) = &self.body {
                dom::set_class(body, MENU_BODY_CLASS, open)?;
            }
            Ok(())
        }
    }

    struct Menu {
        state: RefCell<MenuState>,
        dom: MenuDom,
    }

    impl Menu {
        fn dispatch(&self, event: MenuEvent) {
            let changed = self.state.borrow_mut().apply(event);
            if !changed {
                return;
            }
            let open = self.state.borrow().is_open();
            log::debug!("interactions: mobile menu {} on {event:?}", if open { "opened" } else { "closed" });
            if let Err(err) = self.dom.render(open) {
                log::warn!("interactions: mobile menu render failed: {err}");
            }
        }
    }

    pub struct MobileMenu;

    impl MobileMenu {
        pub fn mount(config: &SiteConfig) -> BindResult {
            let window = dom::window()?;
            let document = dom::document()?;
            let button = dom::require(&document, MENU_BUTTON_SELECTOR)?;
            let nav = dom::require(&document, MENU_NAV_SELECTOR)?;
            let overlay = dom::query(&document, MENU_OVERLAY_SELECTOR)?;
            let links = dom::query_all(&document, MENU_LINK_SELECTOR)?;

            let menu = Rc::new(Menu {
                state: RefCell::new(MenuState::new(config.mobile_breakpoint_px)),
                dom: MenuDom { button: button.clone(), nav, overlay: overlay.clone(), body: document.body() },
            });
            menu.dom.render(false)?;

            let on_button = Rc::clone(&menu);
            dom::listen(&button, "click", move |_| on_button.dispatch(MenuEvent::ButtonClick))?;

            if let Some(overlay) = overlay {
                let on_overlay = Rc::clone(&menu);
                dom::listen(&overlay, "click", move |_| on_overlay.dispatch(MenuEvent::OverlayClick))?;
            }

            for link in &links {
                let on_link = Rc::clone(&menu);
                dom::listen(link, "click", move |_| on_link.dispatch(MenuEvent::LinkClick))?;
            }

            let on_key = Rc::clone(&menu);
            dom::listen(&document, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                    return;
                };
                if let Some(event) = MenuEvent::from_key(&key) {
                    on_key.dispatch(event);
                }
            })?;

            let on_resize = Rc::clone(&menu);
            let resize_window = window.clone();
            dom::listen(&window, "resize", move |_| match dom::inner_width(&resize_window) {
                Ok(width) => on_resize.dispatch(MenuEvent::Resize { width }),
                Err(err) => log::warn!("interactions: mobile menu resize read failed: {err}"),
            })
        }
    }
}
