//! Scroll reveal
//!
//! Tracks which marked elements have been revealed. The transition is
//! one-way: the first qualifying intersection reveals the element and stops
//! observing it, anything after that is ignored.

use std::collections::HashMap;
use std::hash::Hash;

/// What the caller should do after an intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Add the `visible` class and unobserve the element
    Reveal,
    /// Nothing to do
    Ignore,
}

/// Reveal flags for a set of elements keyed by `K`
#[derive(Debug, Clone)]
pub struct RevealSet<K> {
    threshold: f64,
    revealed: HashMap<K, bool>,
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: HashMap::new(),
        }
    }

    /// Intersection ratio an element needs before it counts as visible
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start tracking an element
    pub fn observe(&mut self, key: K) {
        self.revealed.entry(key).or_insert(false);
    }

    /// Handle an intersection report for `key`
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> RevealOutcome {
        if !is_intersecting {
            return RevealOutcome::Ignore;
        }

        match self.revealed.get_mut(key) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                RevealOutcome::Reveal
            }
            _ => RevealOutcome::Ignore,
        }
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.revealed.values().filter(|r| !**r).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
