//! Client-side interaction layer for the marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by static pages. It
//! enhances markup that already exists: it never renders sections of its own,
//! it only reads the DOM, toggles classes and attributes, and injects the
//! small swipe-indicator widgets. The page markup and stylesheets are the
//! other half of the contract; the class names both sides agree on live in
//! [`consts`].
//!
//! Every decision rule lives in a plain-Rust core type that compiles and tests
//! without a browser. The web-sys glue that wires those cores to real DOM
//! events is compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`estimator`] | Picks the most visible item in a horizontal scroller |
//! | [`indicators`] | Swipe dots: active-dot state, init guard, DOM binding |
//! | [`theme`] | Light/dark preference, persisted through [`store`] |
//! | [`store`] | Key/value preference storage seam |
//! | [`debounce`] | Cancel-and-restart timers ("last token wins") |
//! | [`reveal`] | One-shot reveal-on-intersect |
//! | [`nav`] | Active nav link from section intersection |
//! | [`section_nav`] | Mobile section nav visibility and active link |
//! | [`menu`] | Mobile hamburger menu state machine |
//! | [`accordion`] | Accordions with single-open groups |
//! | [`smooth_scroll`] | In-page anchor scrolling below the fixed header |
//! | [`touch`] | Touch feedback on cards |
//! | [`nav_fade`] | Nav fade-in on pages without a hero |
//! | [`viewport`] | Mobile breakpoint predicate |
//! | [`site`] | Builds and mounts every component once at start |
//! | [`config`] | Tunables with defaults and an optional page override |
//! | [`error`] | Binding errors |
//! | [`logging`] | Console logger and panic hook |
//! | [`consts`] | Class-name contract and numeric defaults |

pub mod accordion;
pub mod config;
pub mod consts;
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod estimator;
pub mod indicators;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod nav_fade;
pub mod reveal;
pub mod section_nav;
pub mod site;
pub mod smooth_scroll;
pub mod store;
pub mod theme;
pub mod touch;
pub mod viewport;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, load config, mount once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    let (config, load_err) = match config::SiteConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (config::SiteConfig::default(), Some(err)),
    };
    logging::init(config.level_filter());
    if let Some(err) = load_err {
        log::warn!("interactions: config override ignored: {err}");
    }
    site::Site::new(config).mount_when_ready();
}
