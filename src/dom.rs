//! web-sys glue shared by every binding.
//!
//! Only compiled with `hydrate`. Listener closures registered here live for
//! the page lifetime and are released with `Closure::forget`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::error::{BindError, BindResult};

pub fn window() -> BindResult<Window> {
    web_sys::window().ok_or(BindError::MissingWindow)
}

pub fn document() -> BindResult<Document> {
    window()?.document().ok_or(BindError::MissingDocument)
}

/// Current `innerWidth` in CSS pixels.
pub fn inner_width(window: &Window) -> BindResult<f64> {
    let width = window.inner_width()?;
    width
        .as_f64()
        .ok_or_else(|| BindError::Browser("innerWidth is not a number".to_owned()))
}

pub fn inner_height(window: &Window) -> BindResult<f64> {
    let height = window.inner_height()?;
    height
        .as_f64()
        .ok_or_else(|| BindError::Browser("innerHeight is not a number".to_owned()))
}

fn collect(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> BindResult<Vec<Element>> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> BindResult<Vec<Element>> {
    Ok(collect(&root.query_selector_all(selector)?))
}

pub fn query(document: &Document, selector: &str) -> BindResult<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// First match for `selector`, or [`BindError::MissingAnchor`].
pub fn require(document: &Document, selector: &'static str) -> BindResult<Element> {
    query(document, selector)?.ok_or(BindError::MissingAnchor(selector))
}

pub fn as_html(element: &Element) -> BindResult<HtmlElement> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::Browser(format!("<{}> is not an HTML element", element.tag_name())))
}

/// Element children of `container`, in document order.
pub fn children(container: &Element) -> Vec<Element> {
    let list = container.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) -> BindResult {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Register `handler` for `event` on `target` for the page lifetime.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> BindResult {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but marked passive so scroll/touch stay on the fast path.
pub fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> BindResult {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Build an `IntersectionObserver` whose callback lives for the page lifetime.
///
/// `handler` receives each batch of entries and the observer itself so it
/// can `unobserve` targets it is done with.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
) -> BindResult<IntersectionObserver> {
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
            .collect();
        handler(entries, &observer);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    Ok(observer)
}

/// Run `action` one frame from now.
pub fn next_frame(window: &Window, action: impl FnOnce() + 'static) -> BindResult {
    let cb = Closure::once(action);
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Log a binding failure: absent anchors at `debug`, everything else at `warn`.
pub fn report(binding: &str, result: BindResult) {
    match result {
        Ok(()) => log::debug!("interactions: mounted {binding}"),
        Err(err) if err.is_absent_anchor() => log::debug!("interactions: {binding} skipped: {err}"),
        Err(err) => log::warn!("interactions: {binding} failed: {err}"),
    }
}
