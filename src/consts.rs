//! Shared constants: the DOM class-name contract and numeric defaults.
//!
//! The selectors below are the protocol between this crate and the page
//! markup. Renaming a class in the templates means renaming it here.

// ── Theme ───────────────────────────────────────────────────────

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "ea-theme";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Optional page-defined function called with the new theme name.
pub const THEME_HOOK_FN: &str = "updateVials";

// ── Swipe indicators ────────────────────────────────────────────

/// Horizontally scrolling grids that get swipe dots on mobile.
pub const SWIPE_CONTAINERS: &str =
    ".pillar-grid, .pricing-grid, .protocol-detail, .compound-grid, .source-grid, .stat-grid";

/// `data-*` key (camelCase, as seen through `dataset`) marking an initialised container.
pub const SWIPE_INIT_FLAG: &str = "swipeInit";

pub const SWIPE_INDICATORS_CLASS: &str = "swipe-indicators";
pub const SWIPE_DOT_CLASS: &str = "swipe-dot";
pub const SWIPE_HINT_CLASS: &str = "swipe-hint";
pub const SWIPE_HINT_TOUCHED_CLASS: &str = "touched";

/// Inner markup of the one-time swipe affordance.
pub const SWIPE_HINT_HTML: &str = "<span>Swipe</span><svg viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\"><path d=\"M5 12h14M12 5l7 7-7 7\"/></svg>";

/// Leading padding of a scroll container, subtracted from item offsets.
pub const ITEM_MARGIN_PX: f64 = 24.0;

// ── Shared state classes ────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const OPEN_CLASS: &str = "open";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".reveal, .stagger-children";
pub const REVEAL_ONLY_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_DISTANCE_PROP: &str = "--reveal-distance";
pub const MOBILE_REVEAL_DISTANCE: &str = "20px";

// ── Active nav link ─────────────────────────────────────────────

pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-center a[data-section]";
pub const NAV_LINK_SECTION_ATTR: &str = "data-section";
pub const NAV_THRESHOLD: f64 = 0.3;
pub const NAV_ROOT_MARGIN: &str = "-80px 0px -50% 0px";

// ── Mobile section nav ──────────────────────────────────────────

pub const SECTION_NAV_SELECTOR: &str = ".mobile-section-nav";

// ── Mobile menu ─────────────────────────────────────────────────

pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const MENU_NAV_SELECTOR: &str = ".mobile-nav";
pub const MENU_OVERLAY_SELECTOR: &str = ".mobile-nav-overlay";
pub const MENU_LINK_SELECTOR: &str = ".mobile-nav a";
pub const MENU_BODY_CLASS: &str = "menu-open";

// ── Accordion ───────────────────────────────────────────────────

pub const ACCORDION_SELECTOR: &str = ".mobile-accordion";
pub const ACCORDION_HEADER_SELECTOR: &str = ".mobile-accordion-header";
pub const ACCORDION_GROUP_SELECTOR: &str = ".accordion-group";

// ── Smooth scroll ───────────────────────────────────────────────

pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Height of the fixed header, subtracted from anchor targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

// ── Touch feedback ──────────────────────────────────────────────

pub const TOUCH_CARD_SELECTOR: &str = ".card, .pricing-card, .pillar-card, .compound-card, .stat-card";
pub const TOUCH_TRANSITION: &str = "transform .1s ease";

// ── Nav fade ────────────────────────────────────────────────────

pub const NAV_SELECTOR: &str = "nav";
pub const HERO_SELECTOR: &str = ".hero";
pub const NAV_FADE_OFFSET: &str = "translateY(-14px)";
pub const NAV_FADE_TRANSITION: &str = "opacity .6s ease, transform .6s ease";

// ── Viewport & timing ───────────────────────────────────────────

/// Widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const SCROLL_DEBOUNCE_MS: u32 = 50;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` override.
pub const CONFIG_SCRIPT_ID: &str = "interactions-config";

// ── Startup ─────────────────────────────────────────────────────

/// `document.readyState` while the body is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// Fired once the document has been parsed.
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";
