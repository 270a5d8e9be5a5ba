//! Deferred work
//!
//! Everything that happens "later" on the page (toast auto-hide, the RSVP
//! fade sequence, sparkle cleanup) goes through [`Scheduler`]. The browser
//! front-end backs it with real timeouts; [`ManualScheduler`] runs on a
//! virtual clock so sequences can be stepped deterministically.

use std::collections::BTreeMap;

/// Handle for a scheduled payload, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Work deferred by one of the page components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Hide the toast surface
    HideToast,
    /// Start fading the RSVP form out
    FadeOutForm,
    /// Swap the faded form for the confirmation panel
    RevealConfirmation,
    /// Remove a finished sparkle from the hero
    RemoveSparkle(u64),
}

/// One-shot timer facility
pub trait Scheduler<T> {
    /// Run `payload` after `delay_ms`
    fn schedule(&mut self, delay_ms: u32, payload: T) -> TimerId;

    /// Cancel a pending payload. Returns false if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, id: TimerId) -> bool;
}

/// Virtual-clock scheduler
///
/// Payloads fire in due-time order; ties fire in the order they were
/// scheduled.
#[derive(Debug)]
pub struct ManualScheduler<T> {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), T>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ManualScheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Milliseconds elapsed on the virtual clock
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of payloads still waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending payload
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Move the clock forward and return every payload that came due, with
    /// its due time.
    pub fn advance(&mut self, ms: u64) -> Vec<(u64, T)> {
        let target = self.now_ms + ms;
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.first_entry() {
            let (due, _) = *entry.key();
            if due > target {
                break;
            }
            fired.push((due, entry.remove()));
        }

        self.now_ms = target;
        fired
    }

    /// Pop the earliest payload, moving the clock to its due time.
    ///
    /// Lets callers interleave newly scheduled work with what is already
    /// queued, the way a real event loop would.
    pub fn fire_next(&mut self) -> Option<(u64, T)> {
        let ((due, _), payload) = self.queue.pop_first()?;
        self.now_ms = self.now_ms.max(due);
        Some((due, payload))
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule(&mut self, delay_ms: u32, payload: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((self.now_ms + delay_ms as u64, id), payload);
        TimerId(id)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.queue.keys().find(|(_, seq)| *seq == id.0).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut sched = ManualScheduler::new();
        sched.schedule(500, "late");
        sched.schedule(100, "early");
        sched.schedule(100, "early-second");

        let fired: Vec<_> = sched.advance(1000).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec!["early", "early-second", "late"]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_advance_stops_at_clock() {
        let mut sched = ManualScheduler::new();
        sched.schedule(900, 1);

        assert!(sched.advance(899).is_empty());
        assert_eq!(sched.advance(1), vec![(900, 1)]);
        assert_eq!(sched.now_ms(), 900);
    }

    #[test]
    fn test_cancel() {
        let mut sched = ManualScheduler::new();
        let id = sched.schedule(100, ());

        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        assert!(sched.advance(1000).is_empty());
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut sched = ManualScheduler::new();
        sched.advance(250);
        sched.schedule(100, 'x');
        assert_eq!(sched.next_due(), Some(350));
        assert_eq!(sched.fire_next(), Some((350, 'x')));
        assert_eq!(sched.now_ms(), 350);
    }
}
