//! Hero particles

use wasm_bindgen::JsValue;

use crate::app::SharedApp;
use crate::dom;

/// Append the particles generated at startup to `#particles`
pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    let app = app.borrow();
    let (Some(container), Some(document)) = (app.anchors.particles.as_ref(), dom::document()) else {
        return Ok(());
    };

    for particle in &app.site.particles {
        let el = document.create_element("div")?;
        el.set_class_name("particle");
        el.set_attribute("style", &particle.css_text())?;
        container.append_child(&el)?;
    }

    Ok(())
}
