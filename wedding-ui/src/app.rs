//! Page bootstrap
//!
//! Finds the DOM anchors, builds the component models once and hands a
//! shared [`App`] to each component's binder.

use kk_wedding::{Deferred, DeferredOutcome, PagePresence, Site, SiteConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlFormElement};

use crate::components::{countdown, nav, particles, reveal, rsvp, sparkle, toast};
use crate::dom;
use crate::scheduler::BrowserScheduler;

/// DOM anchors looked up once at startup
pub struct Anchors {
    pub nav: Option<HtmlElement>,
    pub nav_toggle: Option<HtmlElement>,
    pub nav_links: Option<HtmlElement>,
    pub particles: Option<HtmlElement>,
    pub reveal: Vec<Element>,
    pub countdown: Option<countdown::Fields>,
    pub toast: Option<HtmlElement>,
    pub rsvp: Option<rsvp::Elements>,
    pub hero: Option<HtmlElement>,
}

impl Anchors {
    fn find() -> Self {
        let form = dom::by_id::<HtmlFormElement>("rsvpForm");

        Self {
            nav: dom::by_id("nav"),
            nav_toggle: dom::by_id("navToggle"),
            nav_links: dom::by_id("navLinks"),
            particles: dom::by_id("particles"),
            reveal: dom::query_all(".reveal"),
            countdown: countdown::Fields::find(),
            toast: dom::by_id("toast"),
            rsvp: form.map(rsvp::Elements::find),
            hero: dom::query(".hero"),
        }
    }

    fn presence(&self) -> PagePresence {
        PagePresence {
            nav: self.nav.is_some(),
            nav_menu: self.nav_toggle.is_some() && self.nav_links.is_some(),
            particles: self.particles.is_some(),
            reveal_elements: self.reveal.len(),
            countdown: self.countdown.is_some(),
            rsvp_form: self.rsvp.is_some(),
            hero: self.hero.is_some(),
        }
    }
}

/// Everything the page's listeners share
pub struct App {
    pub site: Site,
    pub scheduler: BrowserScheduler,
    pub rng: SmallRng,
    pub anchors: Anchors,
    /// Sparkle elements waiting for removal
    pub sparkle_nodes: HashMap<u64, HtmlElement>,
}

pub type SharedApp = Rc<RefCell<App>>;

/// Initialize the page. Runs once on DOM ready.
pub fn start() {
    if let Err(e) = try_start() {
        web_sys::console::error_2(&"wedding site failed to start:".into(), &e);
    }
}

fn try_start() -> Result<(), JsValue> {
    let anchors = Anchors::find();
    let presence = anchors.presence();

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);

    let site = Site::init(SiteConfig::default(), presence, &mut rng)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
        let weak = weak.clone();
        let scheduler = BrowserScheduler::new(move |deferred| {
            if let Some(app) = weak.upgrade() {
                on_deferred(&app, deferred);
            }
        });

        RefCell::new(App {
            site,
            scheduler,
            rng,
            anchors,
            sparkle_nodes: HashMap::new(),
        })
    });

    nav::bind(&app)?;
    particles::bind(&app)?;
    reveal::bind(&app)?;
    countdown::bind(&app)?;
    rsvp::bind(&app)?;
    sparkle::bind(&app)?;

    dom::log(&format!(
        "wedding site ready: {} particles, {} reveal elements",
        app.borrow().site.particles.len(),
        presence.reveal_elements
    ));
    Ok(())
}

/// A scheduled payload came due
fn on_deferred(app: &SharedApp, deferred: Deferred) {
    let mut guard = app.borrow_mut();
    let App {
        site,
        scheduler,
        anchors,
        sparkle_nodes,
        ..
    } = &mut *guard;

    match site.on_deferred(deferred, scheduler) {
        DeferredOutcome::ToastHidden => toast::render(anchors.toast.as_ref(), site.toast.view()),
        DeferredOutcome::Rsvp(effects) => {
            if let Some(elements) = anchors.rsvp.as_ref() {
                rsvp::apply(elements, &effects);
            }
            toast::render(anchors.toast.as_ref(), site.toast.view());
        }
        DeferredOutcome::RemoveSparkle(id) => {
            if let Some(node) = sparkle_nodes.remove(&id) {
                node.remove();
            }
        }
    }
}
