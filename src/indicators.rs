//! Swipe indicators for horizontally scrolling card grids.
//!
//! On mobile layouts each qualifying grid gets one dot per card, inserted
//! right after the grid. The dot for the most visible card (see
//! [`crate::estimator`]) carries `active`; tapping a dot scrolls its card
//! into view. The first grid on the page also gets a "Swipe" hint.
//!
//! DESIGN
//! ======
//! [`IndicatorState`] owns the single-active invariant and [`SwipeRegistry`]
//! owns the init-once guards; both are plain data so they test natively. The
//! `data-swipe-init` attribute on the grid is the durable guard across
//! repeated setups (resize re-runs setup), the registry mirrors it.

use std::collections::HashSet;

#[cfg(test)]
#[path = "indicators_test.rs"]
mod indicators_test;

/// Which dot in a group is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorState {
    len: usize,
    active: usize,
}

impl IndicatorState {
    /// A group of `len` dots with dot 0 active, or `None` for `len <= 1`.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 1).then_some(Self { len, active: 0 })
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// Make `index` the only active dot, clamped into range.
    ///
    /// Returns `true` if the active dot changed.
    pub fn set_active(&mut self, index: usize) -> bool {
        let next = index.min(self.len - 1);
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Active flag per dot, in order.
    pub fn flags(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.is_active(i))
    }
}

/// Page-wide init guards: one indicator group per grid, one hint per page.
#[derive(Clone, Debug, Default)]
pub struct SwipeRegistry {
    groups: HashSet<u32>,
    next_id: u32,
    hint_placed: bool,
}

impl SwipeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a grid for setup.
    ///
    /// `existing_flag` is the grid's current guard value. A flagged grid was
    /// already set up and yields `None`; otherwise a fresh group id is
    /// returned for the caller to write back as the flag.
    pub fn claim(&mut self, existing_flag: Option<&str>) -> Option<u32> {
        if existing_flag.is_some() {
            return None;
        }
        self.next_id += 1;
        self.groups.insert(self.next_id);
        Some(self.next_id)
    }

    /// Give back a claim whose setup failed, so the grid can be retried.
    pub fn release(&mut self, id: u32) {
        self.groups.remove(&id);
    }

    /// Number of grids claimed so far.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.groups.len()
    }

    /// `true` exactly once per page, and never if a hint already exists.
    pub fn claim_hint(&mut self, hint_in_document: bool) -> bool {
        if self.hint_placed || hint_in_document {
            self.hint_placed = true;
            return false;
        }
        self.hint_placed = true;
        true
    }
}

#[cfg(feature = "hydrate")]
pub use binding::SwipeIndicators;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

    use super::{IndicatorState, SwipeRegistry};
    use crate::config::SiteConfig;
    use crate::consts::{
        ACTIVE_CLASS, SWIPE_CONTAINERS, SWIPE_DOT_CLASS, SWIPE_HINT_CLASS, SWIPE_HINT_HTML, SWIPE_HINT_TOUCHED_CLASS,
        SWIPE_INDICATORS_CLASS, SWIPE_INIT_FLAG,
    };
    use crate::debounce::Debounced;
    use crate::dom;
    use crate::error::BindResult;
    use crate::estimator::{self, ItemMetrics, ScrollWindow};

    /// One grid and its dots.
    struct SwipeGroup {
        container: HtmlElement,
        dots: Vec<Element>,
        state: RefCell<IndicatorState>,
        margin: f64,
    }

    impl SwipeGroup {
        /// Layout of every child, by dot index.
        fn metrics(&self) -> Vec<ItemMetrics> {
            dom::children(&self.container).iter().map(item_metrics).collect()
        }

        fn update(&self) -> BindResult {
            let metrics = self.metrics();
            let window = ScrollWindow::new(
                f64::from(self.container.scroll_left()),
                f64::from(self.container.offset_width()),
            );
            let index = estimator::most_visible(window, &metrics, self.margin);
            let mut state = self.state.borrow_mut();
            if state.set_active(index) {
                log::trace!("interactions: swipe dot {index} active");
            }
            for (dot, active) in self.dots.iter().zip(state.flags()) {
                dom::set_class(dot, ACTIVE_CLASS, active)?;
            }
            Ok(())
        }

        fn scroll_to(&self, index: usize) {
            let Some(item) = self.metrics().get(index).copied() else {
                return;
            };
            if item == ItemMetrics::EMPTY {
                return;
            }
            let target = estimator::scroll_target(item, self.margin);
            let options = ScrollToOptions::new();
            options.set_left(target);
            options.set_behavior(ScrollBehavior::Smooth);
            self.container.scroll_to_with_scroll_to_options(&options);
        }
    }

    /// Non-HTML children (an inline `<svg>`, say) keep their slot but never win.
    fn item_metrics(child: &Element) -> ItemMetrics {
        child.dyn_ref::<HtmlElement>().map_or(ItemMetrics::EMPTY, |item| {
            ItemMetrics::new(f64::from(item.offset_left()), f64::from(item.offset_width()))
        })
    }

    /// Creates indicator groups for every qualifying grid on the page.
    pub struct SwipeIndicators {
        margin: f64,
        scroll_debounce_ms: u32,
        registry: RefCell<SwipeRegistry>,
    }

    impl SwipeIndicators {
        #[must_use]
        pub fn new(config: &SiteConfig) -> Self {
            Self {
                margin: config.item_margin_px,
                scroll_debounce_ms: config.scroll_debounce_ms,
                registry: RefCell::new(SwipeRegistry::new()),
            }
        }

        /// Set up every grid not yet initialised. Safe to call repeatedly.
        ///
        /// A grid that fails is logged and left unflagged for the next run;
        /// the remaining grids are still set up.
        pub fn setup(&self) -> BindResult {
            let document = dom::document()?;
            let before = self.registry.borrow().claimed();
            for container in dom::query_all(&document, SWIPE_CONTAINERS)? {
                if let Err(err) = self.setup_container(&document, &container) {
                    log::warn!("interactions: swipe indicators skipped a container: {err}");
                }
            }
            let added = self.registry.borrow().claimed() - before;
            if added > 0 {
                log::debug!("interactions: swipe indicators on {added} new containers");
            }
            Ok(())
        }

        fn setup_container(&self, document: &Document, container: &Element) -> BindResult {
            let container = dom::as_html(container)?;
            let Some(group_id) = self
                .registry
                .borrow_mut()
                .claim(container.dataset().get(SWIPE_INIT_FLAG).as_deref())
            else {
                return Ok(());
            };
            let result = self.build_group(document, &container, group_id);
            if result.is_err() && container.dataset().get(SWIPE_INIT_FLAG).is_none() {
                self.registry.borrow_mut().release(group_id);
            }
            result
        }

        /// Build and bind the dots for one claimed grid.
        ///
        /// The guard flag is written once the dots are in the document, so a
        /// failure part way leaves the grid to be retried.
        fn build_group(&self, document: &Document, container: &HtmlElement, group_id: u32) -> BindResult {
            let flag = group_id.to_string();
            let item_count = container.children().length() as usize;
            let Some(state) = IndicatorState::new(item_count) else {
                container.dataset().set(SWIPE_INIT_FLAG, &flag)?;
                return Ok(());
            };
            let Some(parent) = container.parent_node() else {
                container.dataset().set(SWIPE_INIT_FLAG, &flag)?;
                return Ok(());
            };

            let wrapper = document.create_element("div")?;
            wrapper.set_class_name(SWIPE_INDICATORS_CLASS);
            let mut dots = Vec::with_capacity(state.dot_count());
            for (index, active) in state.flags().enumerate() {
                let dot = document.create_element("span")?;
                dot.set_class_name(SWIPE_DOT_CLASS);
                dom::set_class(&dot, ACTIVE_CLASS, active)?;
                dot.set_attribute("data-index", &index.to_string())?;
                wrapper.append_child(&dot)?;
                dots.push(dot);
            }
            parent.insert_before(&wrapper, container.next_sibling().as_ref())?;
            if let Err(err) = container.dataset().set(SWIPE_INIT_FLAG, &flag) {
                parent.remove_child(&wrapper)?;
                return Err(err.into());
            }

            let hint_exists = dom::query(document, &format!(".{SWIPE_HINT_CLASS}"))?.is_some();
            if self.registry.borrow_mut().claim_hint(hint_exists) {
                let hint = document.create_element("div")?;
                hint.set_class_name(SWIPE_HINT_CLASS);
                hint.set_inner_html(SWIPE_HINT_HTML);
                parent.insert_before(&hint, wrapper.next_sibling().as_ref())?;
            }

            let group = Rc::new(SwipeGroup {
                container: container.clone(),
                dots,
                state: RefCell::new(state),
                margin: self.margin,
            });
            bind_scroll(document, &group, self.scroll_debounce_ms)?;
            bind_dots(&group)?;
            Ok(())
        }
    }

    fn bind_scroll(document: &Document, group: &Rc<SwipeGroup>, delay_ms: u32) -> BindResult {
        let debounce = Debounced::new(delay_ms);
        let document = document.clone();
        let for_scroll = Rc::clone(group);
        dom::listen_passive(&group.container, "scroll", move |_| {
            let for_timer = Rc::clone(&for_scroll);
            debounce.trigger(move || {
                if let Err(err) = for_timer.update() {
                    log::warn!("interactions: swipe indicator update failed: {err}");
                }
            });
            if let Err(err) = mark_hint_touched(&document) {
                log::warn!("interactions: swipe hint update failed: {err}");
            }
        })
    }

    fn bind_dots(group: &Rc<SwipeGroup>) -> BindResult {
        for (index, dot) in group.dots.iter().enumerate() {
            let group = Rc::clone(group);
            dom::listen(dot, "click", move |_| group.scroll_to(index))?;
        }
        Ok(())
    }

    /// Fade the hint out after the first scroll on any grid.
    fn mark_hint_touched(document: &Document) -> BindResult {
        if let Some(hint) = dom::query(document, &format!(".{SWIPE_HINT_CLASS}"))? {
            if !dom::has_class(&hint, SWIPE_HINT_TOUCHED_CLASS) {
                dom::set_class(&hint, SWIPE_HINT_TOUCHED_CLASS, true)?;
            }
        }
        Ok(())
    }
}
