//! Runtime tunables.
//!
//! Defaults mirror [`crate::consts`]. A page may override any subset by
//! embedding `<script type="application/json" id="interactions-config">`;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::BindError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub mobile_breakpoint_px: f64,
    pub item_margin_px: f64,
    pub scroll_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub header_offset_px: f64,
    pub reveal_threshold: f64,
    pub nav_threshold: f64,
    pub nav_root_margin: String,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            item_margin_px: consts::ITEM_MARGIN_PX,
            scroll_debounce_ms: consts::SCROLL_DEBOUNCE_MS,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
            header_offset_px: consts::HEADER_OFFSET_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            nav_threshold: consts::NAV_THRESHOLD,
            nav_root_margin: consts::NAV_ROOT_MARGIN.to_owned(),
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Config`] if `raw` is not a JSON object matching
    /// the field types.
    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.validated())
    }

    /// Clamp out-of-range values back into something the browser accepts.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.reveal_threshold = clamp_unit(self.reveal_threshold, consts::REVEAL_THRESHOLD);
        self.nav_threshold = clamp_unit(self.nav_threshold, consts::NAV_THRESHOLD);
        if !self.item_margin_px.is_finite() {
            self.item_margin_px = consts::ITEM_MARGIN_PX;
        }
        if !self.header_offset_px.is_finite() {
            self.header_offset_px = consts::HEADER_OFFSET_PX;
        }
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px <= 0.0 {
            self.mobile_breakpoint_px = consts::MOBILE_BREAKPOINT_PX;
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = consts::THEME_STORAGE_KEY.to_owned();
        }
        self
    }

    /// `log_level` as a filter, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Read the page override, or the defaults when the page has none.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Config`] when the override script holds invalid
    /// JSON; the caller falls back to [`SiteConfig::default`].
    #[cfg(feature = "hydrate")]
    pub fn load() -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::MissingWindow)?;
        let document = window.document().ok_or(BindError::MissingDocument)?;
        let Some(script) = document.get_element_by_id(consts::CONFIG_SCRIPT_ID) else {
            return Ok(Self::default());
        };
        match script.text_content() {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { fallback }
}
