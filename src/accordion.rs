//! Progressive-disclosure accordions.
//!
//! Each `.mobile-accordion` opens and closes from its header. Accordions
//! inside the same `.accordion-group` are exclusive: opening one closes its
//! open siblings. Ungrouped accordions never affect each other.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AccordionItem {
    group: Option<usize>,
    open: bool,
}

/// Open state for every accordion on the page.
#[derive(Clone, Debug, Default)]
pub struct AccordionSet {
    items: Vec<AccordionItem>,
}

impl AccordionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an accordion; returns its index.
    pub fn push(&mut self, group: Option<usize>, open: bool) -> usize {
        self.items.push(AccordionItem { group, open });
        self.items.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.open)
    }

    /// Toggle `index`, closing its open group siblings.
    ///
    /// Returns the indices whose state changed, so the caller only touches
    /// those elements. An unknown index changes nothing.
    pub fn toggle(&mut self, index: usize) -> Vec<usize> {
        let Some(target) = self.items.get(index).copied() else {
            return Vec::new();
        };
        let mut changed = Vec::new();
        if let Some(group) = target.group {
            for (i, item) in self.items.iter_mut().enumerate() {
                if i != index && item.open && item.group == Some(group) {
                    item.open = false;
                    changed.push(i);
                }
            }
        }
        self.items[index].open = !target.open;
        changed.push(index);
        changed
    }
}

#[cfg(feature = "hydrate")]
pub use binding::Accordions;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::AccordionSet;
    use crate::consts::{ACCORDION_GROUP_SELECTOR, ACCORDION_HEADER_SELECTOR, ACCORDION_SELECTOR, ACTIVE_CLASS};
    use crate::dom;
    use crate::error::{BindError, BindResult};

    struct Page {
        set: RefCell<AccordionSet>,
        elements: Vec<Element>,
    }

    impl Page {
        fn toggle(&self, index: usize) -> BindResult {
            let changed = self.set.borrow_mut().toggle(index);
            let set = self.set.borrow();
            for i in changed {
                if let Some(element) = self.elements.get(i) {
                    dom::set_class(element, ACTIVE_CLASS, set.is_open(i))?;
                }
            }
            Ok(())
        }
    }

    /// Index of `group` by element identity, registering it if new.
    fn group_index(groups: &mut Vec<Element>, group: Element) -> usize {
        if let Some(index) = groups.iter().position(|known| *known == group) {
            return index;
        }
        groups.push(group);
        groups.len() - 1
    }

    pub struct Accordions;

    impl Accordions {
        pub fn mount() -> BindResult {
            let document = dom::document()?;
            let mut set = AccordionSet::new();
            let mut groups: Vec<Element> = Vec::new();
            let mut elements = Vec::new();
            let mut headers = Vec::new();

            for accordion in dom::query_all(&document, ACCORDION_SELECTOR)? {
                let Some(header) = accordion.query_selector(ACCORDION_HEADER_SELECTOR)? else {
                    continue;
                };
                let group = accordion
                    .closest(ACCORDION_GROUP_SELECTOR)?
                    .map(|group| group_index(&mut groups, group));
                let index = set.push(group, dom::has_class(&accordion, ACTIVE_CLASS));
                elements.push(accordion);
                headers.push((index, header));
            }
            if set.is_empty() {
                return Err(BindError::MissingAnchor(ACCORDION_SELECTOR));
            }
            log::debug!("interactions: {} accordions in {} groups", set.len(), groups.len());

            let page = Rc::new(Page { set: RefCell::new(set), elements });
            for (index, header) in headers {
                let page = Rc::clone(&page);
                dom::listen(&header, "click", move |_| {
                    if let Err(err) = page.toggle(index) {
                        log::warn!("interactions: accordion toggle failed: {err}");
                    }
                })?;
            }
            Ok(())
        }
    }
}
