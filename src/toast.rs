//! Toast Notifier
//!
//! A single transient message surface. Each `show` replaces the text and
//! re-arms the auto-hide timer; the timer of an earlier message is cancelled
//! so it can never hide a newer one.

use crate::scheduler::{Deferred, Scheduler, TimerId};

/// What the toast element should currently display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastView {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct ToastNotifier {
    default_duration_ms: u32,
    view: ToastView,
    hide_timer: Option<TimerId>,
}

impl ToastNotifier {
    pub fn new(default_duration_ms: u32) -> Self {
        Self {
            default_duration_ms,
            view: ToastView::default(),
            hide_timer: None,
        }
    }

    /// Show `message` for the default duration
    pub fn show<S: Scheduler<Deferred> + ?Sized>(&mut self, scheduler: &mut S, message: &str) {
        self.show_for(scheduler, message, self.default_duration_ms);
    }

    /// Show `message` for `duration_ms`
    pub fn show_for<S: Scheduler<Deferred> + ?Sized>(
        &mut self,
        scheduler: &mut S,
        message: &str,
        duration_ms: u32,
    ) {
        if let Some(previous) = self.hide_timer.take() {
            scheduler.cancel(previous);
        }

        self.view.text = message.to_string();
        self.view.visible = true;
        self.hide_timer = Some(scheduler.schedule(duration_ms, Deferred::HideToast));

        tracing::debug!(text = message, duration_ms, "toast shown");
    }

    /// The pending hide timer fired
    pub fn hide(&mut self) {
        self.view.visible = false;
        self.hide_timer = None;
    }

    pub fn view(&self) -> &ToastView {
        &self.view
    }

    pub fn is_visible(&self) -> bool {
        self.view.visible
    }

    pub fn default_duration_ms(&self) -> u32 {
        self.default_duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    fn drive(toast: &mut ToastNotifier, sched: &mut ManualScheduler<Deferred>, ms: u64) {
        for (_, fired) in sched.advance(ms) {
            if fired == Deferred::HideToast {
                toast.hide();
            }
        }
    }

    #[test]
    fn test_auto_hide_after_default_duration() {
        let mut sched = ManualScheduler::new();
        let mut toast = ToastNotifier::new(4000);

        toast.show(&mut sched, "Please enter your name.");
        assert_eq!(toast.view().text, "Please enter your name.");
        assert!(toast.is_visible());

        drive(&mut toast, &mut sched, 3999);
        assert!(toast.is_visible());
        drive(&mut toast, &mut sched, 1);
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_newer_message_governs_hide() {
        let mut sched = ManualScheduler::new();
        let mut toast = ToastNotifier::new(4000);

        toast.show_for(&mut sched, "first", 1000);
        drive(&mut toast, &mut sched, 200);
        toast.show_for(&mut sched, "second", 5000);

        // The first message's timer would have fired at 1000ms
        drive(&mut toast, &mut sched, 1000);
        assert!(toast.is_visible());
        assert_eq!(toast.view().text, "second");
        assert_eq!(sched.pending(), 1);

        drive(&mut toast, &mut sched, 4000);
        assert!(!toast.is_visible());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_shorter_second_duration_wins() {
        let mut sched = ManualScheduler::new();
        let mut toast = ToastNotifier::new(4000);

        toast.show_for(&mut sched, "long", 5000);
        toast.show_for(&mut sched, "short", 100);

        drive(&mut toast, &mut sched, 100);
        assert!(!toast.is_visible());
        assert_eq!(sched.pending(), 0);
    }
}
