//! Live Countdown
//!
//! Time remaining until the ceremony, split into days / hours / minutes /
//! seconds. [`Countdown::tick`] is a pure function of the injected "now" and
//! only reports the fields whose text actually changed since the last tick.

use chrono::{DateTime, FixedOffset, Utc};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// One of the four countdown display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownField {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownField {
    pub const ALL: [CountdownField; 4] = [
        CountdownField::Days,
        CountdownField::Hours,
        CountdownField::Minutes,
        CountdownField::Seconds,
    ];

    /// DOM id of the field's display element
    pub fn element_id(self) -> &'static str {
        match self {
            CountdownField::Days => "cd-days",
            CountdownField::Hours => "cd-hours",
            CountdownField::Minutes => "cd-minutes",
            CountdownField::Seconds => "cd-seconds",
        }
    }

    fn index(self) -> usize {
        match self {
            CountdownField::Days => 0,
            CountdownField::Hours => 1,
            CountdownField::Minutes => 2,
            CountdownField::Seconds => 3,
        }
    }
}

/// Mixed-radix breakdown of a remaining duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split `ms` milliseconds; non-positive input is all zeros
    pub fn from_millis(ms: i64) -> Self {
        if ms <= 0 {
            return Self::default();
        }

        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Milliseconds represented by the whole fields
    pub fn as_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    pub fn get(&self, field: CountdownField) -> i64 {
        match field {
            CountdownField::Days => self.days,
            CountdownField::Hours => self.hours,
            CountdownField::Minutes => self.minutes,
            CountdownField::Seconds => self.seconds,
        }
    }

    /// Zero-padded text for a field. Days can run past two digits.
    pub fn formatted(&self, field: CountdownField) -> String {
        pad(self.get(field))
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// A field whose text must be re-rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: CountdownField,
    pub text: String,
    /// Restart the flip animation
    pub animate: bool,
}

/// Countdown model with per-field change detection
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<FixedOffset>,
    rendered: [Option<String>; 4],
}

impl Countdown {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self {
            target,
            rendered: Default::default(),
        }
    }

    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    /// Milliseconds from `now` to the target (negative once passed)
    pub fn remaining_millis(&self, now: DateTime<Utc>) -> i64 {
        self.target.timestamp_millis() - now.timestamp_millis()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Remaining {
        Remaining::from_millis(self.remaining_millis(now))
    }

    pub fn is_over(&self, now: DateTime<Utc>) -> bool {
        self.remaining_millis(now) <= 0
    }

    /// Compute the display for `now` and return the fields that changed.
    ///
    /// Once the target has passed every field is clamped to "00" and the
    /// flip animation is not restarted.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<FieldUpdate> {
        let animate = !self.is_over(now);
        let remaining = self.remaining(now);

        let mut updates = Vec::new();
        for field in CountdownField::ALL {
            let text = remaining.formatted(field);
            let slot = &mut self.rendered[field.index()];

            if slot.as_deref() != Some(text.as_str()) {
                *slot = Some(text.clone());
                updates.push(FieldUpdate {
                    field,
                    text,
                    animate,
                });
            }
        }

        if !updates.is_empty() {
            tracing::trace!(changed = updates.len(), "countdown tick");
        }
        updates
    }

    /// Last rendered text of a field
    pub fn rendered(&self, field: CountdownField) -> Option<&str> {
        self.rendered[field.index()].as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn wedding() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2027-07-03T16:00:00-04:00").unwrap()
    }

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_decompose() {
        let ms = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 999;
        let r = Remaining::from_millis(ms);
        assert_eq!(r, Remaining { days: 3, hours: 4, minutes: 5, seconds: 6 });
    }

    #[test]
    fn test_decomposition_bounds() {
        let samples = [1, 999, 1_000, 59_999, 3_600_001, MS_PER_DAY - 1, 400 * MS_PER_DAY + 12_345];
        for ms in samples {
            let r = Remaining::from_millis(ms);
            assert!(r.as_millis() <= ms, "{} -> {:?}", ms, r);
            assert!(ms < r.as_millis() + 1000, "{} -> {:?}", ms, r);
            assert!((0..24).contains(&r.hours));
            assert!((0..60).contains(&r.minutes));
            assert!((0..60).contains(&r.seconds));
        }
    }

    #[test]
    fn test_padding_and_long_days() {
        let r = Remaining { days: 365, hours: 7, minutes: 0, seconds: 42 };
        assert_eq!(r.formatted(CountdownField::Days), "365");
        assert_eq!(r.formatted(CountdownField::Hours), "07");
        assert_eq!(r.formatted(CountdownField::Minutes), "00");
        assert_eq!(r.formatted(CountdownField::Seconds), "42");
    }

    #[test]
    fn test_target_offset_respected() {
        let countdown = Countdown::new(wedding());
        // 16:00 at -04:00 is 20:00 UTC
        let now = at("2027-07-03T19:59:59Z");
        assert_eq!(countdown.remaining_millis(now), 1000);
        assert_eq!(countdown.remaining(now).seconds, 1);
    }

    #[test]
    fn test_after_target_all_zero() {
        let mut countdown = Countdown::new(wedding());
        for now in [at("2027-07-03T20:00:00Z"), at("2027-07-04T00:00:00Z"), at("2030-01-01T00:00:00Z")] {
            assert!(countdown.is_over(now));
            countdown.tick(now);
            for field in CountdownField::ALL {
                assert_eq!(countdown.rendered(field), Some("00"));
            }
        }
    }

    #[test]
    fn test_first_tick_renders_everything() {
        let mut countdown = Countdown::new(wedding());
        let updates = countdown.tick(at("2026-10-17T12:00:00Z"));
        assert_eq!(updates.len(), 4);
        assert!(updates.iter().all(|u| u.animate));
    }

    #[test]
    fn test_only_changed_fields_update() {
        let mut countdown = Countdown::new(wedding());
        let now = at("2027-07-01T12:00:30Z");
        countdown.tick(now);

        let updates = countdown.tick(now + Duration::seconds(1));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].field, CountdownField::Seconds);

        // Same instant again: nothing to render
        assert!(countdown.tick(now + Duration::seconds(1)).is_empty());
    }

    #[test]
    fn test_clamped_render_does_not_animate() {
        let mut countdown = Countdown::new(wedding());
        countdown.tick(at("2027-07-03T19:59:58Z"));

        let updates = countdown.tick(at("2027-07-03T20:00:05Z"));
        assert!(!updates.is_empty());
        assert!(updates.iter().all(|u| !u.animate && u.text == "00"));

        assert!(countdown.tick(at("2027-07-03T20:00:06Z")).is_empty());
    }
}
