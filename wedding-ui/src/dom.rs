//! DOM helpers

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element by id, cast to `T`
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching `selector`
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

/// Every element under `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.document_element())
        .map(|root| query_all_in(&root, selector))
        .unwrap_or_default()
}

/// Attach a listener for the lifetime of the page
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], flagged passive so the browser never waits on it
pub fn listen_passive<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        web_sys::console::warn_2(&format!("style {} not applied", property).into(), &e);
    }
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Restart a CSS animation bound to `class`
pub fn restart_animation(el: &HtmlElement, class: &str) {
    let _ = el.class_list().remove_1(class);
    // Reading layout forces a reflow so re-adding the class starts over
    let _ = el.offset_width();
    let _ = el.class_list().add_1(class);
}

/// Next animation frame
pub fn next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        web_sys::console::error_1(&e);
    }
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}
