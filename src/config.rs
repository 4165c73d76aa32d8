//! Typed configuration for the simulator.
//!
//! Every section falls back to its defaults, so an empty file (or no file at
//! all) yields the stock setup: 15 steps per second at 1x, ten speed levels
//! from 0.25x to 10x, and a 400-cell random soup of radius 15.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse config TOML: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// The values parsed but cannot drive a simulation.
    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub soup: SoupConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

impl SimConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid TOML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or [`ConfigError::Invalid`].
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the playback controller relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let playback = &self.playback;
        if !(playback.base_tick_rate.is_finite() && playback.base_tick_rate > 0.0) {
            return Err(invalid(format!(
                "base_tick_rate must be positive, got {}",
                playback.base_tick_rate
            )));
        }
        if playback.speed_levels.is_empty() {
            return Err(invalid("speed_levels must not be empty"));
        }
        if let Some(bad) = playback
            .speed_levels
            .iter()
            .find(|m| !(m.is_finite() && **m > 0.0))
        {
            return Err(invalid(format!("speed multiplier must be positive, got {bad}")));
        }
        if playback.speed_levels.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("speed_levels must be strictly increasing"));
        }
        if playback.default_speed_index >= playback.speed_levels.len() {
            return Err(invalid(format!(
                "default_speed_index {} out of range for {} speed levels",
                playback.default_speed_index,
                playback.speed_levels.len()
            )));
        }
        if self.soup.radius < 0 {
            return Err(invalid(format!("soup radius must not be negative, got {}", self.soup.radius)));
        }
        let view = &self.view;
        if view.window_width <= 0 || view.window_height <= 0 {
            return Err(invalid(format!(
                "window size must be positive, got {}x{}",
                view.window_width, view.window_height
            )));
        }
        if !(view.sidebar_width.is_finite() && view.sidebar_width > 0.0) {
            return Err(invalid(format!("sidebar_width must be positive, got {}", view.sidebar_width)));
        }
        if !(view.cell_size > 0.0) {
            return Err(invalid("cell_size must be positive"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { reason: reason.into() }
}

/// Playback cadence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Generations per second at the 1x multiplier.
    pub base_tick_rate: f32,
    /// Ordered speed multipliers selectable by index.
    pub speed_levels: Vec<f32>,
    /// Index into `speed_levels` used at startup.
    pub default_speed_index: usize,
}

impl PlaybackConfig {
    /// Seconds of simulated time per generation at 1x.
    pub fn base_interval(&self) -> f32 {
        1.0 / self.base_tick_rate
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_tick_rate: 15.0,
            speed_levels: vec![0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 8.0, 10.0],
            default_speed_index: 2,
        }
    }
}

/// Random soup scatter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SoupConfig {
    /// Number of cells drawn (duplicates collapse).
    pub count: usize,
    /// Maximum distance from the center on each axis.
    pub radius: i32,
}

impl Default for SoupConfig {
    fn default() -> Self {
        Self { count: 400, radius: 15 }
    }
}

/// Window and layout geometry for the frontend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub sidebar_width: f32,
    pub cell_size: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_width: 1100,
            window_height: 900,
            sidebar_width: 300.0,
            cell_size: 10.0,
        }
    }
}
