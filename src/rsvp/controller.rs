//! RSVP form controller
//!
//! `Idle → Submitting → Success | Declined`. Submitting is split into two
//! timed stages driven by the [`Scheduler`]: the "Sending…" pause, then the
//! form fade. The controller never touches the DOM; it returns
//! [`RsvpEffect`]s for the front-end to apply.

use crate::config::RsvpConfig;
use crate::scheduler::{Deferred, Scheduler};
use crate::toast::ToastNotifier;

use super::error::RsvpError;
use super::form::{Attendance, RsvpDraft, RsvpValidator};

pub const SENDING_LABEL: &str = "Sending…";
pub const RECEIPT_TOAST: &str = "RSVP received — thank you!";

/// Confirmation copy shown after the form is replaced
pub fn confirmation_message(first_name: &str, attendance: Attendance) -> String {
    match attendance {
        Attendance::Yes => format!(
            "Wonderful, {}! We've received your RSVP and we cannot wait to celebrate with you on July 3rd.",
            first_name
        ),
        Attendance::No => format!(
            "We're sorry you won't be able to make it, {}. You'll be missed dearly — we'll raise a glass to you.",
            first_name
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    /// Label reads "Sending…", waiting for the fade
    Sending,
    /// Form is fading out
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpPhase {
    Idle,
    Submitting {
        stage: SubmitStage,
        first_name: String,
        attendance: Attendance,
    },
    Success,
    Declined,
}

/// DOM changes requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpEffect {
    SetSubmitLabel(&'static str),
    /// Transition the form's opacity to 0 over `duration_ms`
    FadeOutForm { duration_ms: u32 },
    /// `display: none` on the form, `display: block` on the confirmation panel
    SwapToConfirmation,
    SetConfirmMessage(String),
}

/// Inline style of the meal / dietary / song groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupStyle {
    pub opacity: &'static str,
    pub pointer_events: &'static str,
    /// Unset until the guest first picks an answer
    pub transform: Option<&'static str>,
    pub transition: Option<&'static str>,
}

impl GroupStyle {
    /// Before any attendance choice
    pub const INITIAL: GroupStyle = GroupStyle {
        opacity: "0.3",
        pointer_events: "none",
        transform: None,
        transition: None,
    };

    pub fn for_choice(attending: bool) -> Self {
        let transition = Some("opacity 0.4s, transform 0.4s");
        if attending {
            GroupStyle {
                opacity: "1",
                pointer_events: "auto",
                transform: Some("translateY(0)"),
                transition,
            }
        } else {
            GroupStyle {
                opacity: "0.3",
                pointer_events: "none",
                transform: Some("translateY(-4px)"),
                transition,
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.pointer_events == "auto"
    }
}

pub struct RsvpController {
    config: RsvpConfig,
    validator: RsvpValidator,
    phase: RsvpPhase,
    group_style: GroupStyle,
}

impl RsvpController {
    pub fn new(config: RsvpConfig, validator: RsvpValidator) -> Self {
        Self {
            config,
            validator,
            phase: RsvpPhase::Idle,
            group_style: GroupStyle::INITIAL,
        }
    }

    pub fn phase(&self) -> &RsvpPhase {
        &self.phase
    }

    pub fn group_style(&self) -> GroupStyle {
        self.group_style
    }

    /// An attendance radio changed
    pub fn select_attendance(&mut self, attendance: Attendance) -> GroupStyle {
        self.group_style = GroupStyle::for_choice(attendance.is_attending());
        self.group_style
    }

    /// Handle a form submission.
    ///
    /// Validation failures show their toast and leave the phase untouched.
    /// Submissions arriving while a previous one is in flight, or after it
    /// finished, are ignored.
    pub fn submit<S: Scheduler<Deferred> + ?Sized>(
        &mut self,
        draft: &RsvpDraft,
        scheduler: &mut S,
        toast: &mut ToastNotifier,
    ) -> Result<Vec<RsvpEffect>, RsvpError> {
        if self.phase != RsvpPhase::Idle {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return Ok(Vec::new());
        }

        let rsvp = match self.validator.validate(draft) {
            Ok(rsvp) => rsvp,
            Err(e) => {
                tracing::debug!(error = %e, "rsvp rejected");
                toast.show(scheduler, &e.to_string());
                return Err(e);
            }
        };

        tracing::info!(attendance = ?rsvp.attendance, "rsvp accepted");
        self.phase = RsvpPhase::Submitting {
            stage: SubmitStage::Sending,
            first_name: rsvp.first_name,
            attendance: rsvp.attendance,
        };
        scheduler.schedule(self.config.send_delay_ms, Deferred::FadeOutForm);

        Ok(vec![RsvpEffect::SetSubmitLabel(SENDING_LABEL)])
    }

    /// Advance the submission when one of its timers fires
    pub fn on_deferred<S: Scheduler<Deferred> + ?Sized>(
        &mut self,
        deferred: Deferred,
        scheduler: &mut S,
        toast: &mut ToastNotifier,
    ) -> Vec<RsvpEffect> {
        let phase = std::mem::replace(&mut self.phase, RsvpPhase::Idle);

        match (deferred, phase) {
            (
                Deferred::FadeOutForm,
                RsvpPhase::Submitting {
                    stage: SubmitStage::Sending,
                    first_name,
                    attendance,
                },
            ) => {
                self.phase = RsvpPhase::Submitting {
                    stage: SubmitStage::FadingOut,
                    first_name,
                    attendance,
                };
                scheduler.schedule(self.config.fade_ms, Deferred::RevealConfirmation);
                vec![RsvpEffect::FadeOutForm {
                    duration_ms: self.config.fade_ms,
                }]
            }
            (
                Deferred::RevealConfirmation,
                RsvpPhase::Submitting {
                    stage: SubmitStage::FadingOut,
                    first_name,
                    attendance,
                },
            ) => {
                self.phase = match attendance {
                    Attendance::Yes => RsvpPhase::Success,
                    Attendance::No => RsvpPhase::Declined,
                };
                tracing::info!(phase = ?self.phase, "rsvp confirmed");

                toast.show_for(scheduler, RECEIPT_TOAST, self.config.receipt_toast_ms);
                vec![
                    RsvpEffect::SwapToConfirmation,
                    RsvpEffect::SetConfirmMessage(confirmation_message(&first_name, attendance)),
                ]
            }
            (_, phase) => {
                self.phase = phase;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    struct Harness {
        controller: RsvpController,
        sched: ManualScheduler<Deferred>,
        toast: ToastNotifier,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                controller: RsvpController::new(RsvpConfig::default(), RsvpValidator::new().unwrap()),
                sched: ManualScheduler::new(),
                toast: ToastNotifier::new(4000),
            }
        }

        fn submit(&mut self, draft: &RsvpDraft) -> Result<Vec<RsvpEffect>, RsvpError> {
            self.controller.submit(draft, &mut self.sched, &mut self.toast)
        }

        /// Advance the clock, returning controller effects with their due time
        fn advance(&mut self, ms: u64) -> Vec<(u64, RsvpEffect)> {
            let target = self.sched.now_ms() + ms;
            let mut effects = Vec::new();
            while self.sched.next_due().is_some_and(|due| due <= target) {
                let Some((due, fired)) = self.sched.fire_next() else { break };
                match fired {
                    Deferred::HideToast => self.toast.hide(),
                    other => {
                        let out = self.controller.on_deferred(other, &mut self.sched, &mut self.toast);
                        effects.extend(out.into_iter().map(|e| (due, e)));
                    }
                }
            }
            let rest = target - self.sched.now_ms();
            self.sched.advance(rest);
            effects
        }
    }

    fn valid(attendance: Attendance) -> RsvpDraft {
        RsvpDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            attendance: Some(attendance),
        }
    }

    #[test]
    fn test_rejects_without_transition() {
        let mut h = Harness::new();
        let draft = RsvpDraft { first_name: " ".to_string(), ..valid(Attendance::Yes) };

        assert_eq!(h.submit(&draft), Err(RsvpError::MissingName));
        assert_eq!(h.controller.phase(), &RsvpPhase::Idle);
        assert_eq!(h.toast.view().text, "Please enter your name.");
        assert!(h.toast.is_visible());

        // Only the toast hide timer is pending
        assert_eq!(h.sched.pending(), 1);
    }

    #[test]
    fn test_bad_email_message() {
        let mut h = Harness::new();
        let draft = RsvpDraft { email: "ada@example".to_string(), ..valid(Attendance::Yes) };

        assert_eq!(h.submit(&draft), Err(RsvpError::InvalidEmail));
        assert_eq!(h.toast.view().text, "Please enter a valid email address.");
    }

    #[test]
    fn test_can_resubmit_after_fixing() {
        let mut h = Harness::new();
        let draft = RsvpDraft { attendance: None, ..valid(Attendance::Yes) };
        assert_eq!(h.submit(&draft), Err(RsvpError::MissingAttendance));

        assert!(h.submit(&valid(Attendance::Yes)).is_ok());
        assert!(matches!(h.controller.phase(), RsvpPhase::Submitting { .. }));
    }

    #[test]
    fn test_success_sequence() {
        let mut h = Harness::new();

        let effects = h.submit(&valid(Attendance::Yes)).unwrap();
        assert_eq!(effects, vec![RsvpEffect::SetSubmitLabel("Sending…")]);

        assert!(h.advance(899).is_empty());
        assert_eq!(
            h.advance(1),
            vec![(900, RsvpEffect::FadeOutForm { duration_ms: 500 })]
        );
        assert!(matches!(
            h.controller.phase(),
            RsvpPhase::Submitting { stage: SubmitStage::FadingOut, .. }
        ));

        let effects = h.advance(500);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], (1400, RsvpEffect::SwapToConfirmation));
        match &effects[1].1 {
            RsvpEffect::SetConfirmMessage(msg) => {
                assert!(msg.contains("Ada"));
                assert!(msg.contains("cannot wait to celebrate with you on July 3rd."));
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(h.controller.phase(), &RsvpPhase::Success);

        assert_eq!(h.toast.view().text, "RSVP received — thank you!");
        h.advance(4999);
        assert!(h.toast.is_visible());
        h.advance(1);
        assert!(!h.toast.is_visible());
    }

    #[test]
    fn test_declined_sequence() {
        let mut h = Harness::new();
        h.submit(&valid(Attendance::No)).unwrap();

        let effects = h.advance(2000);
        let message = effects
            .iter()
            .find_map(|(_, e)| match e {
                RsvpEffect::SetConfirmMessage(m) => Some(m.clone()),
                _ => None,
            })
            .unwrap();

        assert!(message.contains("missed dearly"));
        assert!(message.starts_with("We're sorry you won't be able to make it, Ada."));
        assert_eq!(h.controller.phase(), &RsvpPhase::Declined);
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut h = Harness::new();
        h.submit(&valid(Attendance::Yes)).unwrap();
        assert_eq!(h.submit(&valid(Attendance::No)), Ok(Vec::new()));

        let effects = h.advance(2000);
        assert_eq!(effects.len(), 3);
        assert_eq!(h.controller.phase(), &RsvpPhase::Success);
    }

    #[test]
    fn test_stray_timer_ignored() {
        let mut h = Harness::new();
        let effects = h
            .controller
            .on_deferred(Deferred::RevealConfirmation, &mut h.sched, &mut h.toast);
        assert!(effects.is_empty());
        assert_eq!(h.controller.phase(), &RsvpPhase::Idle);
    }

    #[test]
    fn test_group_style_follows_attendance() {
        let mut h = Harness::new();
        assert!(!h.controller.group_style().is_interactive());
        assert_eq!(h.controller.group_style().transform, None);

        let style = h.controller.select_attendance(Attendance::Yes);
        assert_eq!(style.opacity, "1");
        assert!(style.is_interactive());

        let style = h.controller.select_attendance(Attendance::No);
        assert_eq!(style.opacity, "0.3");
        assert_eq!(style.transform, Some("translateY(-4px)"));
    }
}
