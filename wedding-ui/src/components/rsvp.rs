//! RSVP form
//!
//! Reads the form into a draft on submit and applies the controller's
//! effects. The conditional meal / dietary / song groups follow the
//! attendance radios; every field marks its wrapper `focused` while focused.

use kk_wedding::{Attendance, GroupStyle, RsvpDraft, RsvpEffect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::app::{App, SharedApp};
use crate::components::toast;
use crate::dom;

/// Form and the elements its submission touches
pub struct Elements {
    pub form: HtmlFormElement,
    pub confirm: Option<HtmlElement>,
    pub confirm_message: Option<HtmlElement>,
    pub submit_text: Option<HtmlElement>,
    /// Meal, dietary and song groups, whichever exist
    pub groups: Vec<HtmlElement>,
}

impl Elements {
    pub fn find(form: HtmlFormElement) -> Self {
        let groups = ["mealGroup", "dietaryGroup", "songGroup"]
            .iter()
            .filter_map(|id| dom::by_id::<HtmlElement>(id))
            .collect();

        Self {
            form,
            confirm: dom::by_id("rsvpConfirm"),
            confirm_message: dom::by_id("confirmMessage"),
            submit_text: dom::by_id("submitText"),
            groups,
        }
    }

    fn field_value(&self, name: &str) -> String {
        self.form
            .query_selector(&format!("[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn checked_attendance(&self) -> Option<Attendance> {
        let checked = self
            .form
            .query_selector("input[name=\"attendance\"]:checked")
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Attendance::from_radio_value(&checked.value())
    }

    fn draft(&self) -> RsvpDraft {
        RsvpDraft {
            first_name: self.field_value("firstName"),
            last_name: self.field_value("lastName"),
            email: self.field_value("email"),
            attendance: self.checked_attendance(),
        }
    }

    fn style_groups(&self, style: GroupStyle) {
        for group in &self.groups {
            if let Some(transition) = style.transition {
                dom::set_style(group, "transition", transition);
            }
            dom::set_style(group, "opacity", style.opacity);
            dom::set_style(group, "pointer-events", style.pointer_events);
            if let Some(transform) = style.transform {
                dom::set_style(group, "transform", transform);
            }
        }
    }
}

/// Apply controller effects to the page
pub fn apply(elements: &Elements, effects: &[RsvpEffect]) {
    for effect in effects {
        match effect {
            RsvpEffect::SetSubmitLabel(label) => {
                if let Some(el) = &elements.submit_text {
                    el.set_text_content(Some(label));
                }
            }
            RsvpEffect::FadeOutForm { duration_ms } => {
                let transition = format!("opacity {}s", *duration_ms as f64 / 1000.0);
                dom::set_style(&elements.form, "transition", &transition);
                dom::set_style(&elements.form, "opacity", "0");
            }
            RsvpEffect::SwapToConfirmation => {
                dom::set_style(&elements.form, "display", "none");
                if let Some(el) = &elements.confirm {
                    dom::set_style(el, "display", "block");
                }
            }
            RsvpEffect::SetConfirmMessage(message) => {
                if let Some(el) = &elements.confirm_message {
                    el.set_text_content(Some(message));
                }
            }
        }
    }
}

pub fn bind(app: &SharedApp) -> Result<(), JsValue> {
    let form = {
        let app = app.borrow();
        let (Some(elements), Some(controller)) = (app.anchors.rsvp.as_ref(), app.site.rsvp.as_ref())
        else {
            return Ok(());
        };
        elements.style_groups(controller.group_style());
        elements.form.clone()
    };

    bind_attendance(app, &form)?;
    bind_focus(&form)?;

    let app = app.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        submit(&app);
    })
}

fn bind_attendance(app: &SharedApp, form: &HtmlFormElement) -> Result<(), JsValue> {
    for radio in dom::query_all_in(form, "input[name=\"attendance\"]") {
        let Ok(input) = radio.clone().dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let app = app.clone();
        dom::listen(&radio, "change", move |_: Event| {
            let Some(attendance) = Attendance::from_radio_value(&input.value()) else {
                return;
            };
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            let (Some(controller), Some(elements)) = (app.site.rsvp.as_mut(), app.anchors.rsvp.as_ref())
            else {
                return;
            };
            elements.style_groups(controller.select_attendance(attendance));
        })?;
    }
    Ok(())
}

/// Focus styling is pure DOM state and never touches the shared app, so it
/// stays safe when hiding the form fires `blur` inside another handler.
fn bind_focus(form: &HtmlFormElement) -> Result<(), JsValue> {
    for field in dom::query_all_in(form, "input, select, textarea") {
        let focused = field.clone();
        dom::listen(&field, "focus", move |_: Event| mark_wrapper(&focused, true))?;

        let blurred = field.clone();
        dom::listen(&field, "blur", move |_: Event| mark_wrapper(&blurred, false))?;
    }
    Ok(())
}

fn mark_wrapper(field: &Element, focused: bool) {
    if let Some(wrapper) = field.parent_element() {
        dom::toggle_class(&wrapper, "focused", focused);
    }
}

fn submit(app: &SharedApp) {
    let mut guard = app.borrow_mut();
    let App {
        site,
        scheduler,
        anchors,
        ..
    } = &mut *guard;
    let Some(elements) = anchors.rsvp.as_ref() else {
        return;
    };

    let draft = elements.draft();
    if let Ok(effects) = site.submit_rsvp(&draft, scheduler) {
        apply(elements, &effects);
    }
    toast::render(anchors.toast.as_ref(), site.toast.view());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn element<T: JsCast>(tag: &str) -> T {
        let document = dom::document().unwrap();
        let el = document.create_element(tag).unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el.dyn_into::<T>().unwrap()
    }

    fn elements() -> Elements {
        let confirm: HtmlElement = element("div");
        dom::set_style(&confirm, "display", "none");
        Elements {
            form: element("form"),
            confirm: Some(confirm),
            confirm_message: Some(element("p")),
            submit_text: Some(element("span")),
            groups: vec![element("div")],
        }
    }

    fn display(el: &HtmlElement) -> String {
        el.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_submission_effects() {
        let elements = elements();

        apply(&elements, &[RsvpEffect::SetSubmitLabel("Sending…")]);
        let label = elements.submit_text.as_ref().unwrap();
        assert_eq!(label.text_content().as_deref(), Some("Sending…"));

        apply(&elements, &[RsvpEffect::FadeOutForm { duration_ms: 500 }]);
        assert_eq!(elements.form.style().get_property_value("opacity").unwrap(), "0");
        assert!(elements.form.style().get_property_value("transition").unwrap().contains("0.5s"));

        apply(
            &elements,
            &[
                RsvpEffect::SwapToConfirmation,
                RsvpEffect::SetConfirmMessage("Wonderful, Ada!".to_string()),
            ],
        );
        assert_eq!(display(&elements.form), "none");
        assert_eq!(display(elements.confirm.as_ref().unwrap()), "block");
        let message = elements.confirm_message.as_ref().unwrap();
        assert_eq!(message.text_content().as_deref(), Some("Wonderful, Ada!"));
    }

    #[wasm_bindgen_test]
    fn test_swap_without_confirm_panel() {
        let elements = Elements { confirm: None, confirm_message: None, ..elements() };
        apply(
            &elements,
            &[RsvpEffect::SwapToConfirmation, RsvpEffect::SetConfirmMessage("x".to_string())],
        );
        assert_eq!(display(&elements.form), "none");
    }

    #[wasm_bindgen_test]
    fn test_group_styles() {
        let elements = elements();
        let group = &elements.groups[0];

        elements.style_groups(GroupStyle::INITIAL);
        assert_eq!(group.style().get_property_value("opacity").unwrap(), "0.3");
        assert_eq!(group.style().get_property_value("pointer-events").unwrap(), "none");

        elements.style_groups(GroupStyle::for_choice(true));
        assert_eq!(group.style().get_property_value("opacity").unwrap(), "1");
        assert_eq!(group.style().get_property_value("pointer-events").unwrap(), "auto");
    }

    #[wasm_bindgen_test]
    fn test_focus_marks_wrapper() {
        let form: HtmlFormElement = element("form");
        let wrapper = dom::document().unwrap().create_element("div").unwrap();
        let input = dom::document().unwrap().create_element("input").unwrap();
        wrapper.append_child(&input).unwrap();
        form.append_child(&wrapper).unwrap();

        bind_focus(&form).unwrap();

        input.dispatch_event(&Event::new("focus").unwrap()).unwrap();
        assert!(wrapper.class_list().contains("focused"));

        input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
        assert!(!wrapper.class_list().contains("focused"));
    }
}
