//! Hero decoration
//!
//! Floating particles generated once at page load and short-lived sparkles
//! that trail the pointer. Both take the random source as a parameter so the
//! counts and bounds can be checked with a seeded generator.

use rand::Rng;
use serde::Serialize;

use crate::config::{span, ParticleConfig, SparkleConfig};

/// Animation parameters of one floating particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal position, percent of the container width
    pub left_pct: f64,
    /// Width and height in px
    pub size_px: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    /// Inline style for the particle element
    pub fn css_text(&self) -> String {
        format!(
            "left: {}%; width: {}px; height: {}px; --dur: {}s; --delay: {}s; opacity: 0;",
            self.left_pct, self.size_px, self.size_px, self.duration_secs, self.delay_secs
        )
    }
}

/// Generate the hero particle field
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Vec<Particle> {
    (0..config.count)
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(span(config.size_px)),
            duration_secs: rng.random_range(span(config.duration_secs)),
            delay_secs: rng.random_range(span(config.delay_secs)),
        })
        .collect()
}

/// A sparkle spawned under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    /// Position relative to the hero's top-left corner
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    /// How far it drifts upward while fading
    pub rise_px: f64,
}

impl Sparkle {
    /// Style at spawn time
    pub fn initial_css(&self, fade_ms: u32) -> String {
        let secs = fade_ms as f64 / 1000.0;
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
             background: var(--gold); border-radius: 50%; pointer-events: none; \
             opacity: 0.7; transform: translate(-50%, -50%); \
             transition: opacity {}s, transform {}s; z-index: 1;",
            self.x, self.y, self.size_px, self.size_px, secs, secs
        )
    }

    /// Transform applied on the next frame, once the transition is armed
    pub fn final_transform(&self) -> String {
        format!("translate(-50%, -{}px) scale(0.2)", self.rise_px)
    }
}

/// Spawns sparkles with a fixed probability per pointer move
#[derive(Debug, Clone)]
pub struct SparkleSpawner {
    config: SparkleConfig,
    next_id: u64,
}

impl SparkleSpawner {
    pub fn new(config: SparkleConfig) -> Self {
        Self {
            config,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &SparkleConfig {
        &self.config
    }

    /// Handle a pointer move at hero-relative `(x, y)`
    pub fn on_pointer_move<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f64, y: f64) -> Option<Sparkle> {
        if !rng.random_bool(self.config.probability) {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        Some(Sparkle {
            id,
            x,
            y,
            size_px: rng.random_range(span(self.config.size_px)),
            rise_px: rng.random_range(span(self.config.rise_px)),
        })
    }
}

/// Hero-relative pointer position, matching how the sparkle is placed with
/// `position: absolute` inside the hero.
pub fn hero_relative(client: (f64, f64), scroll: (f64, f64), hero_origin: (f64, f64)) -> (f64, f64) {
    (
        client.0 + scroll.0 - hero_origin.0,
        client.1 + scroll.1 - hero_origin.1,
    )
}
