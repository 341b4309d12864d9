//! Configuration loaded from `chyron.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use chyron_core::RotationTiming;

const CONFIG_FILE: &str = "chyron.toml";
const CONFIG_DIR: &str = "chyron";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ChyronConfig {
    /// Banner cadence.
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Terminal UI tuning.
    #[serde(default)]
    pub ui: UiConfig,
}

impl ChyronConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist; otherwise `./chyron.toml` and the user
    /// config directory are tried in order and a missing file falls back to
    /// defaults.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed, or when a
    /// value fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed, or when a
    /// value fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(CONFIG_DIR).join("config.toml"));
        }
        paths
    }

    fn validate(&self) -> Result<()> {
        if !self.rotation.display_secs.is_finite() || self.rotation.display_secs <= 0.0 {
            bail!("rotation.display_secs must be a positive number");
        }
        if !self.rotation.transition_secs.is_finite() || self.rotation.transition_secs < 0.0 {
            bail!("rotation.transition_secs must not be negative");
        }
        if self.ui.tick_rate_ms == 0 {
            bail!("ui.tick_rate_ms must be positive");
        }
        Ok(())
    }
}

/// `[rotation]` block: how long items stay on screen and how long fades take.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RotationConfig {
    /// Seconds each item stays fully visible.
    #[serde(default = "default_display_secs")]
    pub display_secs: f64,
    /// Seconds of the fade between two items.
    #[serde(default = "default_transition_secs")]
    pub transition_secs: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
            transition_secs: default_transition_secs(),
        }
    }
}

impl RotationConfig {
    /// Convert into the engine's timing value.
    #[must_use]
    pub fn timing(&self) -> RotationTiming {
        RotationTiming {
            display: Duration::from_secs_f64(self.display_secs),
            transition: Duration::from_secs_f64(self.transition_secs),
        }
    }
}

const fn default_display_secs() -> f64 {
    5.0
}

const fn default_transition_secs() -> f64 {
    1.0
}

/// `[ui]` block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Interval in milliseconds between UI ticks/redraws.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

const fn default_tick_rate_ms() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("must create temp file");
        file.write_all(contents.as_bytes()).expect("must write config");
        file
    }

    #[test]
    fn defaults_match_the_broadcast_cadence() {
        let config = ChyronConfig::default();
        assert!((config.rotation.display_secs - 5.0).abs() < f64::EPSILON);
        assert!((config.rotation.transition_secs - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.ui.tick_rate_ms, 200);

        let timing = config.rotation.timing();
        assert_eq!(timing.display, Duration::from_secs(5));
        assert_eq!(timing.transition, Duration::from_secs(1));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = write_config("[rotation]\ndisplay_secs = 8.5\n");
        let config = ChyronConfig::from_file(file.path()).expect("must parse config");
        assert!((config.rotation.display_secs - 8.5).abs() < f64::EPSILON);
        assert!((config.rotation.transition_secs - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.ui.tick_rate_ms, 200);
    }

    #[test]
    fn rejects_non_positive_display() {
        let file = write_config("[rotation]\ndisplay_secs = 0.0\n");
        let err = ChyronConfig::from_file(file.path());
        assert!(err.is_err());
    }

    #[test]
    fn rejects_negative_transition() {
        let file = write_config("[rotation]\ntransition_secs = -1.0\n");
        assert!(ChyronConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let file = write_config("[ui]\ntick_rate_ms = 0\n");
        assert!(ChyronConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(ChyronConfig::load(Some(Path::new("/nonexistent/chyron.toml"))).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("rotation = not-a-table");
        assert!(ChyronConfig::from_file(file.path()).is_err());
    }
}
