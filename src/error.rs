//! Errors returned by DOM bindings.
//!
//! A binding that cannot find its anchor element returns
//! [`BindError::MissingAnchor`]; the caller treats that as "feature not on
//! this page" and keeps going. Nothing here is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no window available")]
    MissingWindow,
    #[error("no document available")]
    MissingDocument,
    #[error("anchor element not found: {0}")]
    MissingAnchor(&'static str),
    #[error("browser call failed: {0}")]
    Browser(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BindError {
    /// True for the expected "this page does not use the feature" case.
    #[must_use]
    pub fn is_absent_anchor(&self) -> bool {
        matches!(self, Self::MissingAnchor(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type BindResult<T = ()> = Result<T, BindError>;
