//! Configuration System
//!
//! Every tunable of the site lives here with its default. The front-end
//! runs on `SiteConfig::default()`; the preview CLI can load a TOML file and
//! apply environment variable overrides on top.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub countdown: CountdownConfig,

    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub particles: ParticleConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub rsvp: RsvpConfig,

    #[serde(default)]
    pub sparkle: SparkleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Countdown configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CountdownConfig {
    /// Ceremony start, RFC 3339 with a fixed offset
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
}

fn default_target() -> String {
    "2027-07-03T16:00:00-04:00".to_string() // 4pm ET
}

fn default_tick_ms() -> u32 {
    1000
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl CountdownConfig {
    /// Parse the configured target instant
    pub fn target_instant(&self) -> Result<DateTime<FixedOffset>, ConfigError> {
        DateTime::parse_from_rfc3339(&self.target).map_err(|e| ConfigError::Invalid {
            field: "countdown.target",
            error: e.to_string(),
        })
    }
}

/// Navigation bar configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
}

fn default_scroll_threshold() -> f64 {
    40.0
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold(),
        }
    }
}

/// Hero particle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParticleConfig {
    #[serde(default = "default_particle_count")]
    pub count: usize,

    #[serde(default = "default_particle_size")]
    pub size_px: [f64; 2],

    #[serde(default = "default_particle_duration")]
    pub duration_secs: [f64; 2],

    #[serde(default = "default_particle_delay")]
    pub delay_secs: [f64; 2],
}

fn default_particle_count() -> usize {
    28
}

fn default_particle_size() -> [f64; 2] {
    [1.0, 3.5]
}

fn default_particle_duration() -> [f64; 2] {
    [6.0, 14.0]
}

fn default_particle_delay() -> [f64; 2] {
    [0.0, 8.0]
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: default_particle_count(),
            size_px: default_particle_size(),
            duration_secs: default_particle_duration(),
            delay_secs: default_particle_delay(),
        }
    }
}

/// Scroll reveal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

fn default_reveal_threshold() -> f64 {
    0.12
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
        }
    }
}

/// Toast configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_duration")]
    pub default_duration_ms: u32,
}

fn default_toast_duration() -> u32 {
    4000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration(),
        }
    }
}

/// RSVP submission timing
#[derive(Debug, Clone, Deserialize)]
pub struct RsvpConfig {
    /// Pause between "Sending…" and the form fade
    #[serde(default = "default_send_delay")]
    pub send_delay_ms: u32,

    #[serde(default = "default_fade")]
    pub fade_ms: u32,

    #[serde(default = "default_receipt_toast")]
    pub receipt_toast_ms: u32,
}

fn default_send_delay() -> u32 {
    900
}

fn default_fade() -> u32 {
    500
}

fn default_receipt_toast() -> u32 {
    5000
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay(),
            fade_ms: default_fade(),
            receipt_toast_ms: default_receipt_toast(),
        }
    }
}

/// Cursor sparkle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SparkleConfig {
    /// Chance that a single pointer move spawns a sparkle
    #[serde(default = "default_sparkle_probability")]
    pub probability: f64,

    #[serde(default = "default_sparkle_size")]
    pub size_px: [f64; 2],

    #[serde(default = "default_sparkle_rise")]
    pub rise_px: [f64; 2],

    #[serde(default = "default_sparkle_fade")]
    pub fade_ms: u32,

    #[serde(default = "default_sparkle_lifetime")]
    pub lifetime_ms: u32,
}

fn default_sparkle_probability() -> f64 {
    0.15
}

fn default_sparkle_size() -> [f64; 2] {
    [2.0, 6.0]
}

fn default_sparkle_rise() -> [f64; 2] {
    [20.0, 50.0]
}

fn default_sparkle_fade() -> u32 {
    800
}

fn default_sparkle_lifetime() -> u32 {
    900
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            probability: default_sparkle_probability(),
            size_px: default_sparkle_size(),
            rise_px: default_sparkle_rise(),
            fade_ms: default_sparkle_fade(),
            lifetime_ms: default_sparkle_lifetime(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Turn a `[low, high]` pair into a half-open sampling range
pub(crate) fn span(bounds: [f64; 2]) -> Range<f64> {
    bounds[0]..bounds[1]
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: SiteConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment variable overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.countdown.target_instant()?;

        if self.countdown.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "countdown.tick_ms",
                error: "must be positive".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                error: format!("{} is outside 0..=1", self.reveal.threshold),
            });
        }

        if !(0.0..=1.0).contains(&self.sparkle.probability) {
            return Err(ConfigError::Invalid {
                field: "sparkle.probability",
                error: format!("{} is outside 0..=1", self.sparkle.probability),
            });
        }

        let ranges = [
            ("particles.size_px", self.particles.size_px),
            ("particles.duration_secs", self.particles.duration_secs),
            ("particles.delay_secs", self.particles.delay_secs),
            ("sparkle.size_px", self.sparkle.size_px),
            ("sparkle.rise_px", self.sparkle.rise_px),
        ];
        for (field, [low, high]) in ranges {
            if !(low.is_finite() && high.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    error: format!("bounds [{}, {}] must be finite", low, high),
                });
            }
            if low >= high {
                return Err(ConfigError::Invalid {
                    field,
                    error: format!("empty range [{}, {}]", low, high),
                });
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(target) = std::env::var("WEDDING_COUNTDOWN_TARGET") {
            self.countdown.target = target;
        }

        if let Ok(level) = std::env::var("WEDDING_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WEDDING_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {field}: {error}")]
    Invalid { field: &'static str, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Wedding site configuration
#
# Environment variables override these settings:
# - WEDDING_COUNTDOWN_TARGET
# - WEDDING_LOG_LEVEL
# - WEDDING_LOG_FORMAT

[countdown]
# Ceremony start (RFC 3339, fixed offset)
target = "2027-07-03T16:00:00-04:00"

# Countdown refresh interval (ms)
tick_ms = 1000

[nav]
# Scroll offset after which the nav bar switches to its scrolled look (px)
scroll_threshold_px = 40.0

[particles]
count = 28
size_px = [1.0, 3.5]
duration_secs = [6.0, 14.0]
delay_secs = [0.0, 8.0]

[reveal]
# Fraction of an element that must be visible before it is revealed
threshold = 0.12

[toast]
default_duration_ms = 4000

[rsvp]
send_delay_ms = 900
fade_ms = 500
receipt_toast_ms = 5000

[sparkle]
probability = 0.15
size_px = [2.0, 6.0]
rise_px = [20.0, 50.0]
fade_ms = 800
lifetime_ms = 900

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
