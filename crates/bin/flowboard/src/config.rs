//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `flowboard.toml` in the working directory unless another path is
//! given on the command line. Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use flowboard_domain::animation::{AnimationSettings, Easing};
use flowboard_domain::error::FlowboardError;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Counter animation settings.
    pub animation: AnimationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Counter animation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time from first frame to settled value, in milliseconds.
    pub duration_ms: u64,
    /// Easing curve name (`linear`, `ease-out-cubic`, `ease-out-quart`, `ease-in-out-cubic`).
    pub easing: Easing,
    /// Delay between two frames of the native frame scheduler, in milliseconds.
    pub frame_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FLOWBOARD_ANIMATION_DURATION_MS") {
            if let Ok(duration_ms) = val.parse() {
                self.animation.duration_ms = duration_ms;
            }
        }
        if let Some(val) = lookup("FLOWBOARD_EASING") {
            if let Ok(easing) = val.parse() {
                self.animation.easing = easing;
            }
        }
        if let Some(val) = lookup("FLOWBOARD_FRAME_INTERVAL_MS") {
            if let Ok(interval) = val.parse() {
                self.animation.frame_interval_ms = interval;
            }
        }
        if let Some(val) = lookup("FLOWBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "frame_interval_ms must be non-zero".to_string(),
            ));
        }
        self.animation_settings()?;
        Ok(())
    }

    /// Build the domain animation settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Animation`] when the duration is zero.
    pub fn animation_settings(&self) -> Result<AnimationSettings, ConfigError> {
        Ok(AnimationSettings::builder()
            .duration(Duration::from_millis(self.animation.duration_ms))
            .easing(self.animation.easing)
            .build()?)
    }

    /// Delay between two native frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.animation.frame_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: Easing::default(),
            frame_interval_ms: 16,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "flowboard=info,flowboard_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Animation settings rejected by the domain.
    #[error("invalid animation settings")]
    Animation(#[from] FlowboardError),
}
