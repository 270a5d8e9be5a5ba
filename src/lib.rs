//! # Kaya & Kevin Wedding
//!
//! Interaction models behind the wedding site: navigation state, hero
//! decoration, scroll reveal, the live countdown and the RSVP form with its
//! toast. Everything here is target-independent; the `wedding-ui` crate binds
//! it to the browser DOM.
//!
//! ## Modules
//!
//! - [`countdown`]: time remaining to the ceremony with per-field change detection
//! - [`rsvp`]: validation and the simulated submission sequence
//! - [`toast`]: single-slot notifier with a cancellable auto-hide
//! - [`scheduler`]: deferred work, real or on a virtual clock
//! - [`site`]: one-shot page initialization producing the component handles
//!
//! ## Quick Start
//!
//! ```rust
//! use kk_wedding::*;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut site = Site::init(SiteConfig::default(), PagePresence::full(3), &mut rng).unwrap();
//! let mut scheduler = ManualScheduler::new();
//!
//! let draft = RsvpDraft {
//!     first_name: "Ada".into(),
//!     last_name: "Lovelace".into(),
//!     email: "ada@example.com".into(),
//!     attendance: Some(Attendance::Yes),
//! };
//! site.submit_rsvp(&draft, &mut scheduler).unwrap();
//!
//! while let Some((_, deferred)) = scheduler.fire_next() {
//!     site.on_deferred(deferred, &mut scheduler);
//! }
//! ```

pub mod config;
pub mod countdown;
pub mod decor;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod rsvp;
pub mod scheduler;
pub mod site;
pub mod toast;

// Re-export top-level types for convenience
pub use config::{generate_default_config, ConfigError, SiteConfig};

pub use countdown::{Countdown, CountdownField, FieldUpdate, Remaining};

pub use decor::{generate_particles, hero_relative, Particle, Sparkle, SparkleSpawner};

pub use error::{SiteError, SiteResult};

pub use nav::NavState;

pub use reveal::{RevealOutcome, RevealSet};

pub use rsvp::{
    Attendance, GroupStyle, Rsvp, RsvpController, RsvpDraft, RsvpEffect, RsvpError, RsvpPhase,
    RsvpValidator,
};

pub use scheduler::{Deferred, ManualScheduler, Scheduler, TimerId};

pub use site::{DeferredOutcome, PagePresence, Site};

pub use toast::{ToastNotifier, ToastView};
