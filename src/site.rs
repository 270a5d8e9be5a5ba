//! Page wiring
//!
//! [`Site::init`] runs once on page-ready and produces one handle per
//! component whose DOM anchor exists. Components with a missing anchor stay
//! `None` and are never touched again.

use rand::Rng;

use crate::config::SiteConfig;
use crate::countdown::Countdown;
use crate::decor::{generate_particles, Particle, SparkleSpawner};
use crate::error::SiteResult;
use crate::nav::NavState;
use crate::reveal::RevealSet;
use crate::rsvp::{RsvpController, RsvpDraft, RsvpEffect, RsvpError, RsvpValidator};
use crate::scheduler::{Deferred, Scheduler};
use crate::toast::ToastNotifier;

/// Which DOM anchors were found on the page
#[derive(Debug, Clone, Copy, Default)]
pub struct PagePresence {
    /// `#nav`
    pub nav: bool,
    /// `#navToggle` and `#navLinks`
    pub nav_menu: bool,
    /// `#particles`
    pub particles: bool,
    /// Number of `.reveal` elements
    pub reveal_elements: usize,
    /// `#cd-days`
    pub countdown: bool,
    /// `#rsvpForm`
    pub rsvp_form: bool,
    /// `.hero`
    pub hero: bool,
}

impl PagePresence {
    /// Every anchor present, for previews and tests
    pub fn full(reveal_elements: usize) -> Self {
        Self {
            nav: true,
            nav_menu: true,
            particles: true,
            reveal_elements,
            countdown: true,
            rsvp_form: true,
            hero: true,
        }
    }
}

/// Result of routing a fired timer
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredOutcome {
    /// The toast visibility changed
    ToastHidden,
    /// RSVP form effects to apply; the toast may also have changed
    Rsvp(Vec<RsvpEffect>),
    /// A sparkle should be removed from the hero
    RemoveSparkle(u64),
}

/// Bound component handles for one page session
pub struct Site {
    pub config: SiteConfig,
    pub nav: Option<NavState>,
    pub particles: Vec<Particle>,
    pub reveal: Option<RevealSet<usize>>,
    pub countdown: Option<Countdown>,
    pub toast: ToastNotifier,
    pub rsvp: Option<RsvpController>,
    pub sparkles: Option<SparkleSpawner>,
}

impl Site {
    /// Build the component handles for the anchors in `presence`
    pub fn init<R: Rng + ?Sized>(
        config: SiteConfig,
        presence: PagePresence,
        rng: &mut R,
    ) -> SiteResult<Self> {
        config.validate()?;

        let nav = (presence.nav || presence.nav_menu).then(|| NavState::new(&config.nav));

        let particles = if presence.particles {
            generate_particles(rng, &config.particles)
        } else {
            Vec::new()
        };

        let reveal = (presence.reveal_elements > 0).then(|| {
            let mut set = RevealSet::new(config.reveal.threshold);
            for index in 0..presence.reveal_elements {
                set.observe(index);
            }
            set
        });

        let countdown = if presence.countdown {
            Some(Countdown::new(config.countdown.target_instant()?))
        } else {
            None
        };

        let rsvp = if presence.rsvp_form {
            Some(RsvpController::new(config.rsvp.clone(), RsvpValidator::new()?))
        } else {
            None
        };

        let sparkles = presence
            .hero
            .then(|| SparkleSpawner::new(config.sparkle.clone()));

        let toast = ToastNotifier::new(config.toast.default_duration_ms);

        tracing::info!(
            nav = nav.is_some(),
            particles = particles.len(),
            reveal = presence.reveal_elements,
            countdown = countdown.is_some(),
            rsvp = rsvp.is_some(),
            sparkles = sparkles.is_some(),
            "site initialized"
        );

        Ok(Self {
            config,
            nav,
            particles,
            reveal,
            countdown,
            toast,
            rsvp,
            sparkles,
        })
    }

    /// Submit the RSVP form. A page without a form has nothing to submit.
    pub fn submit_rsvp<S: Scheduler<Deferred> + ?Sized>(
        &mut self,
        draft: &RsvpDraft,
        scheduler: &mut S,
    ) -> Result<Vec<RsvpEffect>, RsvpError> {
        match self.rsvp.as_mut() {
            Some(rsvp) => rsvp.submit(draft, scheduler, &mut self.toast),
            None => Ok(Vec::new()),
        }
    }

    /// Route a fired timer to the component that scheduled it
    pub fn on_deferred<S: Scheduler<Deferred> + ?Sized>(
        &mut self,
        deferred: Deferred,
        scheduler: &mut S,
    ) -> DeferredOutcome {
        match deferred {
            Deferred::HideToast => {
                self.toast.hide();
                DeferredOutcome::ToastHidden
            }
            Deferred::FadeOutForm | Deferred::RevealConfirmation => {
                let effects = match self.rsvp.as_mut() {
                    Some(rsvp) => rsvp.on_deferred(deferred, scheduler, &mut self.toast),
                    None => Vec::new(),
                };
                DeferredOutcome::Rsvp(effects)
            }
            Deferred::RemoveSparkle(id) => DeferredOutcome::RemoveSparkle(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::{Attendance, RsvpPhase};
    use crate::scheduler::ManualScheduler;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(2027)
    }

    #[test]
    fn test_empty_page_is_inert() {
        let site = Site::init(SiteConfig::default(), PagePresence::default(), &mut rng()).unwrap();
        assert!(site.nav.is_none());
        assert!(site.particles.is_empty());
        assert!(site.reveal.is_none());
        assert!(site.countdown.is_none());
        assert!(site.rsvp.is_none());
        assert!(site.sparkles.is_none());
    }

    #[test]
    fn test_full_page() {
        let site = Site::init(SiteConfig::default(), PagePresence::full(5), &mut rng()).unwrap();
        assert_eq!(site.particles.len(), 28);
        assert_eq!(site.reveal.as_ref().map(|r| r.pending()), Some(5));
        assert!(site.countdown.is_some());
        assert!(site.rsvp.is_some());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SiteConfig::default();
        config.countdown.target = "soon".to_string();
        assert!(Site::init(config, PagePresence::full(0), &mut rng()).is_err());
    }

    #[test]
    fn test_submission_routed_through_site() {
        let mut site = Site::init(SiteConfig::default(), PagePresence::full(0), &mut rng()).unwrap();
        let mut sched = ManualScheduler::new();

        let draft = RsvpDraft {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            attendance: Some(Attendance::Yes),
        };
        site.submit_rsvp(&draft, &mut sched).unwrap();

        while let Some((_, fired)) = sched.fire_next() {
            site.on_deferred(fired, &mut sched);
        }

        let phase = site.rsvp.as_ref().map(|r| r.phase().clone());
        assert_eq!(phase, Some(RsvpPhase::Success));
        // Receipt toast was shown and then auto-hidden
        assert_eq!(site.toast.view().text, "RSVP received — thank you!");
        assert!(!site.toast.is_visible());
    }

    #[test]
    fn test_sparkle_removal_routed() {
        let mut site = Site::init(SiteConfig::default(), PagePresence::full(0), &mut rng()).unwrap();
        let mut sched = ManualScheduler::new();
        assert_eq!(
            site.on_deferred(Deferred::RemoveSparkle(4), &mut sched),
            DeferredOutcome::RemoveSparkle(4)
        );
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_submit_without_form() {
        let mut site = Site::init(SiteConfig::default(), PagePresence::default(), &mut rng()).unwrap();
        let mut sched = ManualScheduler::new();
        assert_eq!(site.submit_rsvp(&RsvpDraft::default(), &mut sched), Ok(Vec::new()));
        assert_eq!(sched.pending(), 0);
    }
}
