//! Light/dark theme preference.
//!
//! The page's inline head script picks the initial `data-theme` on `<html>`
//! before first paint; this module treats that attribute as current truth,
//! re-applies a stored preference on load, and flips it on toggle. The
//! choice is persisted through a [`PreferenceStore`] under one key.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::store::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Strict parse: only `"light"` and `"dark"` are themes.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Tracks the current theme and persists every change.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), current: Theme::default() }
    }

    /// Resolve the theme at page load.
    ///
    /// A valid stored preference wins and is returned so the caller can
    /// apply it to the document. Otherwise the root attribute is adopted
    /// (unset or unrecognised means dark) and `None` is returned: the
    /// document already shows the right theme.
    pub fn load(&mut self, root_attr: Option<&str>) -> Option<Theme> {
        if let Some(stored) = self.store.get(&self.key).as_deref().and_then(Theme::parse) {
            self.current = stored;
            return Some(stored);
        }
        self.sync(root_attr);
        None
    }

    /// Adopt the root attribute as current truth.
    pub fn sync(&mut self, root_attr: Option<&str>) {
        self.current = root_attr.and_then(Theme::parse).unwrap_or_default();
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.store.set(&self.key, next.as_str());
        self.current = next;
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(feature = "hydrate")]
pub use binding::ThemeBinding;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, Window};

    use super::{Theme, ThemeController};
    use crate::config::SiteConfig;
    use crate::consts::{THEME_ATTR, THEME_HOOK_FN, THEME_TOGGLE_ID};
    use crate::dom;
    use crate::error::{BindError, BindResult};
    use crate::store::BrowserStore;

    pub struct ThemeBinding;

    impl ThemeBinding {
        /// Apply any stored preference, then wire `#themeToggle`.
        pub fn mount(config: &SiteConfig) -> BindResult {
            let window = dom::window()?;
            let document = dom::document()?;
            let root = document.document_element().ok_or(BindError::MissingAnchor("html"))?;

            let mut controller = ThemeController::new(BrowserStore::open(&window), config.storage_key.clone());
            if let Some(stored) = controller.load(root.get_attribute(THEME_ATTR).as_deref()) {
                apply(&window, &root, stored)?;
            }

            let toggle = document
                .get_element_by_id(THEME_TOGGLE_ID)
                .ok_or(BindError::MissingAnchor("#themeToggle"))?;
            let controller = Rc::new(RefCell::new(controller));
            dom::listen(&toggle, "click", move |_| {
                let next = {
                    let mut controller = controller.borrow_mut();
                    controller.sync(root.get_attribute(THEME_ATTR).as_deref());
                    controller.toggle()
                };
                log::info!("interactions: theme set to {}", next.as_str());
                if let Err(err) = apply(&window, &root, next) {
                    log::warn!("interactions: theme apply failed: {err}");
                }
            })
        }
    }

    fn apply(window: &Window, root: &Element, theme: Theme) -> BindResult {
        root.set_attribute(THEME_ATTR, theme.as_str())?;
        call_hook(window, theme)
    }

    /// Call `window.updateVials(theme)` when the page defines it.
    fn call_hook(window: &Window, theme: Theme) -> BindResult {
        let hook = js_sys::Reflect::get(window, &JsValue::from_str(THEME_HOOK_FN))?;
        if let Some(hook) = hook.dyn_ref::<js_sys::Function>() {
            hook.call1(&JsValue::NULL, &JsValue::from_str(theme.as_str()))?;
        }
        Ok(())
    }
}
