//! Toast surface

use kk_wedding::ToastView;
use web_sys::HtmlElement;

use crate::dom;

/// Mirror the notifier's state onto `#toast`. A page without one shows
/// nothing.
pub fn render(el: Option<&HtmlElement>, view: &ToastView) {
    let Some(el) = el else {
        return;
    };

    el.set_text_content(Some(&view.text));
    dom::toggle_class(el, "show", view.visible);
}
