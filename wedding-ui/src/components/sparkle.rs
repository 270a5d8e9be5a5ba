//! Cursor sparkles over the hero

use kk_wedding::{hero_relative, Deferred, Scheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::app::{App, SharedApp};
use crate::dom;

pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    let Some(hero) = app.borrow().anchors.hero.clone() else {
        return Ok(());
    };

    let app = app.clone();
    let hero_el = hero.clone();
    dom::listen(&hero, "mousemove", move |event: MouseEvent| {
        if let Err(e) = spawn(&app, &hero_el, &event) {
            web_sys::console::error_1(&e);
        }
    })
}

fn spawn(app: &SharedApp, hero: &HtmlElement, event: &MouseEvent) -> Result<(), JsValue> {
    let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
        return Ok(());
    };

    let rect = hero.get_bounding_client_rect();
    let (x, y) = hero_relative(
        (event.client_x() as f64, event.client_y() as f64),
        (window.scroll_x()?, window.scroll_y()?),
        (rect.left(), rect.top()),
    );

    let mut guard = app.borrow_mut();
    let App {
        site,
        scheduler,
        rng,
        sparkle_nodes,
        ..
    } = &mut *guard;
    let Some(spawner) = site.sparkles.as_mut() else {
        return Ok(());
    };
    let Some(sparkle) = spawner.on_pointer_move(rng, x, y) else {
        return Ok(());
    };

    let config = spawner.config();
    let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    el.set_attribute("style", &sparkle.initial_css(config.fade_ms))?;
    hero.append_child(&el)?;

    // The transition only runs if the end state lands on a later frame
    let animated = el.clone();
    let transform = sparkle.final_transform();
    dom::next_frame(move || {
        dom::set_style(&animated, "opacity", "0");
        dom::set_style(&animated, "transform", &transform);
    });

    scheduler.schedule(config.lifetime_ms, Deferred::RemoveSparkle(sparkle.id));
    sparkle_nodes.insert(sparkle.id, el);
    Ok(())
}
