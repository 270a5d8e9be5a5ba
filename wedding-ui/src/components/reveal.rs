//! Scroll reveal
//!
//! One intersection observer for every `.reveal` element. An element gets
//! `visible` the first time it crosses the threshold and is then unobserved.

use kk_wedding::RevealOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::SharedApp;
use crate::dom;

pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    let (elements, threshold) = {
        let app = app.borrow();
        match app.site.reveal.as_ref() {
            Some(set) => (app.anchors.reveal.clone(), set.threshold()),
            None => return Ok(()),
        }
    };

    let callback = {
        let app = app.clone();
        let elements = elements.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| *el == target) else {
                    continue;
                };

                let outcome = match app.borrow_mut().site.reveal.as_mut() {
                    Some(set) => set.on_intersection(&index, entry.is_intersecting()),
                    None => RevealOutcome::Ignore,
                };

                if outcome == RevealOutcome::Reveal {
                    dom::toggle_class(&target, "visible", true);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }

    Ok(())
}
