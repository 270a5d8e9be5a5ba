//! Kaya & Kevin Wedding Site
//!
//! Client-side interactions for the static wedding page, compiled to
//! WebAssembly.
//!
//! # Features
//!
//! - Nav bar scroll state and mobile menu
//! - Hero particles and cursor sparkles
//! - Scroll reveal
//! - Live countdown to the ceremony
//! - RSVP form with validation and toast feedback
//!
//! # Architecture
//!
//! The markup is static. On page-ready the app looks up the DOM anchors,
//! builds the `kk_wedding::Site` models for the ones present and wires event
//! listeners that feed the models and apply what they return to the DOM.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

mod app;
mod components;
mod dom;
mod scheduler;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let on_ready = Closure::once_into_js(app::start);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            web_sys::console::error_1(&e);
        }
    } else {
        app::start();
    }
}
