//! Navigation bar
//!
//! Scrolled look past the threshold and the mobile menu toggle.

use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlElement};

use crate::app::SharedApp;
use crate::dom;

pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    bind_scroll(app)?;
    bind_menu(app)
}

fn bind_scroll(app: &SharedApp) -> Result<(), JsValue> {
    let Some(nav) = app.borrow().anchors.nav.clone() else {
        return Ok(());
    };
    let Some(window) = dom::window() else {
        return Ok(());
    };

    let on_scroll = {
        let app = app.clone();
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let scrolled = match app.borrow_mut().site.nav.as_mut() {
                Some(state) => state.on_scroll(scroll_y),
                None => return,
            };
            dom::toggle_class(&nav, "scrolled", scrolled);
        }
    };

    on_scroll();
    dom::listen_passive(&window, "scroll", move |_: Event| on_scroll())
}

fn bind_menu(app: &SharedApp) -> Result<(), JsValue> {
    let (toggle, links) = {
        let app = app.borrow();
        match (&app.anchors.nav_toggle, &app.anchors.nav_links) {
            (Some(toggle), Some(links)) => (toggle.clone(), links.clone()),
            _ => return Ok(()),
        }
    };

    {
        let app = app.clone();
        let toggle_el = toggle.clone();
        let links_el = links.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            let mut app = app.borrow_mut();
            let Some(state) = app.site.nav.as_mut() else {
                return;
            };
            let open = state.toggle_menu();
            render_menu(&toggle_el, &links_el, open, state.body_overflow());
        })?;
    }

    for link in dom::query_all_in(&links, "a") {
        let app = app.clone();
        let toggle_el = toggle.clone();
        let links_el = links.clone();
        dom::listen(&link, "click", move |_: Event| {
            let mut app = app.borrow_mut();
            let Some(state) = app.site.nav.as_mut() else {
                return;
            };
            state.close_menu();
            render_menu(&toggle_el, &links_el, false, state.body_overflow());
        })?;
    }

    Ok(())
}

fn render_menu(toggle: &HtmlElement, links: &HtmlElement, open: bool, overflow: &str) {
    dom::toggle_class(links, "open", open);
    dom::toggle_class(toggle, "open", open);

    // Body scrolling is locked while the menu covers the page
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        dom::set_style(&body, "overflow", overflow);
    }
}
