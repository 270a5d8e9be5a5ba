//! Component binders
//!
//! Each module wires one page component: it attaches listeners for the
//! elements found at startup and applies model output to the DOM.

pub mod countdown;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod rsvp;
pub mod sparkle;
pub mod toast;
