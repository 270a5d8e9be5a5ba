//! Live countdown

use chrono::Utc;
use gloo_timers::callback::Interval;
use kk_wedding::{CountdownField, FieldUpdate};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::app::SharedApp;
use crate::dom;

/// The four display elements
pub struct Fields {
    days: HtmlElement,
    hours: HtmlElement,
    minutes: HtmlElement,
    seconds: HtmlElement,
}

impl Fields {
    /// All four fields, or none when `#cd-days` is missing
    pub fn find() -> Option<Self> {
        let days = dom::by_id(CountdownField::Days.element_id())?;
        Some(Self {
            days,
            hours: dom::by_id(CountdownField::Hours.element_id())?,
            minutes: dom::by_id(CountdownField::Minutes.element_id())?,
            seconds: dom::by_id(CountdownField::Seconds.element_id())?,
        })
    }

    fn get(&self, field: CountdownField) -> &HtmlElement {
        match field {
            CountdownField::Days => &self.days,
            CountdownField::Hours => &self.hours,
            CountdownField::Minutes => &self.minutes,
            CountdownField::Seconds => &self.seconds,
        }
    }

    fn apply(&self, updates: &[FieldUpdate]) {
        for update in updates {
            let el = self.get(update.field);
            if update.animate {
                dom::restart_animation(el, "flip");
            }
            el.set_text_content(Some(&update.text));
        }
    }
}

/// Render now, then once per tick
pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    let tick_ms = {
        let app = app.borrow();
        if app.site.countdown.is_none() || app.anchors.countdown.is_none() {
            return Ok(());
        }
        app.site.config.countdown.tick_ms
    };

    let tick = {
        let app = app.clone();
        move || {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            let (Some(countdown), Some(fields)) =
                (app.site.countdown.as_mut(), app.anchors.countdown.as_ref())
            else {
                return;
            };
            fields.apply(&countdown.tick(Utc::now()));
        }
    };

    tick();
    Interval::new(tick_ms, tick).forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn span() -> HtmlElement {
        let document = dom::document().unwrap();
        let el = document.create_element("span").unwrap().dyn_into::<HtmlElement>().unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn fields() -> Fields {
        Fields { days: span(), hours: span(), minutes: span(), seconds: span() }
    }

    #[wasm_bindgen_test]
    fn test_apply_writes_text_and_flips() {
        let fields = fields();
        fields.apply(&[FieldUpdate {
            field: CountdownField::Seconds,
            text: "07".to_string(),
            animate: true,
        }]);

        assert_eq!(fields.seconds.text_content().as_deref(), Some("07"));
        assert!(fields.seconds.class_list().contains("flip"));
        // Untouched fields keep their content
        assert_eq!(fields.days.text_content().as_deref(), Some(""));
        assert!(!fields.days.class_list().contains("flip"));
    }

    #[wasm_bindgen_test]
    fn test_clamped_update_does_not_flip() {
        let fields = fields();
        fields.apply(&[FieldUpdate {
            field: CountdownField::Hours,
            text: "00".to_string(),
            animate: false,
        }]);

        assert_eq!(fields.hours.text_content().as_deref(), Some("00"));
        assert!(!fields.hours.class_list().contains("flip"));
    }
}
