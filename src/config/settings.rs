//! Configuration settings for the sparse Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Minimum wall-clock time per generation, in milliseconds. Zero
    /// disables pacing and lets the simulation free-run.
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub alive_glyph: String,
    pub dead_glyph: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 100,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alive_glyph: "█".to_string(),
            dead_glyph: "░".to_string(),
        }
    }
}

impl SimulationConfig {
    /// The frame interval as a [`Duration`].
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.alive_glyph.is_empty() {
            anyhow::bail!("alive glyph must not be empty");
        }

        if self.display.dead_glyph.is_empty() {
            anyhow::bail!("dead glyph must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(frame_interval_ms) = cli_overrides.frame_interval_ms {
            self.simulation.frame_interval_ms = frame_interval_ms;
        }
        if let Some(ref alive_glyph) = cli_overrides.alive_glyph {
            self.display.alive_glyph = alive_glyph.clone();
        }
        if let Some(ref dead_glyph) = cli_overrides.dead_glyph {
            self.display.dead_glyph = dead_glyph.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub frame_interval_ms: Option<u64>,
    pub alive_glyph: Option<String>,
    pub dead_glyph: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.simulation.frame_interval_ms, 100);
        assert_eq!(
            settings.simulation.frame_interval(),
            Duration::from_millis(100)
        );
        assert_eq!(settings.display.alive_glyph, "█");
        assert_eq!(settings.display.dead_glyph, "░");
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut written = Settings::default();
        written.simulation.frame_interval_ms = 250;
        std::fs::write(&path, serde_yaml::to_string(&written).unwrap()).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.frame_interval_ms, 250);
        assert_eq!(loaded.display.alive_glyph, "█");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "display:\n  alive_glyph: \"#\"\n").unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.display.alive_glyph, "#");
        assert_eq!(loaded.display.dead_glyph, "░");
        assert_eq!(loaded.simulation.frame_interval_ms, 100);
    }

    #[test]
    fn test_validate_rejects_empty_glyph() {
        let mut settings = Settings::default();
        settings.display.dead_glyph = String::new();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            frame_interval_ms: Some(0),
            alive_glyph: Some("O".to_string()),
            dead_glyph: None,
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.simulation.frame_interval_ms, 0);
        assert_eq!(settings.display.alive_glyph, "O");
        assert_eq!(settings.display.dead_glyph, "░");
    }
}
