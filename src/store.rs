//! Named string preferences.
//!
//! [`PreferenceStore`] is the seam between the theme controller and the
//! browser's origin-scoped localStorage. [`MemoryStore`] backs tests and is
//! the fallback when storage is disabled (private mode, sandboxed iframes).

use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`, or an in-memory map when it is unavailable.
#[cfg(feature = "hydrate")]
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    #[must_use]
    pub fn open(window: &web_sys::Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::debug!("interactions: localStorage absent, using memory store");
                Self::Memory(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("interactions: localStorage denied: {err:?}");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("interactions: localStorage read failed for {key}: {err:?}");
                    None
                }
            },
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("interactions: localStorage write failed for {key}: {err:?}");
                }
            }
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}
