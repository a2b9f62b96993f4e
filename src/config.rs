use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants;
use crate::release::CadenceThresholds;

const MAX_INTERVAL_DAYS: i64 = 365;

const MAX_SPLIT_GAP_MULTIPLIER: i64 = 52;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub cadence: CadenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" for human-readable output, "json" for structured lines
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    /// Expected days between weekly episodes (default: 7)
    pub nominal_interval_days: i64,

    /// Days a weekly gap may drift from the nominal interval (default: 2)
    pub weekly_tolerance_days: i64,

    /// Gap, in nominal intervals, beyond which a season counts as split (default: 4)
    pub split_gap_multiplier: i64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            nominal_interval_days: constants::cadence::NOMINAL_INTERVAL_DAYS,
            weekly_tolerance_days: constants::cadence::WEEKLY_TOLERANCE_DAYS,
            split_gap_multiplier: constants::cadence::SPLIT_GAP_MULTIPLIER,
        }
    }
}

impl CadenceConfig {
    #[must_use]
    pub fn thresholds(&self) -> CadenceThresholds {
        CadenceThresholds {
            nominal_interval_days: self.nominal_interval_days,
            weekly_tolerance_days: self.weekly_tolerance_days,
            split_gap_multiplier: self.split_gap_multiplier,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(Self::default_config_path());

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(
                config_dir
                    .join(constants::config::APP_DIR)
                    .join(constants::config::FILE_NAME),
            );
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(format!(".{}", constants::config::APP_DIR))
                    .join(constants::config::FILE_NAME),
            );
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(constants::config::FILE_NAME)
    }

    /// Writes the default config to `./config.toml` unless one is there.
    pub fn create_default_if_missing() -> Result<bool> {
        Self::create_default_at(&Self::default_config_path())
    }

    pub fn create_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        let cadence = &self.cadence;

        if !(1..=MAX_INTERVAL_DAYS).contains(&cadence.nominal_interval_days) {
            anyhow::bail!("Cadence interval must be between 1 and {MAX_INTERVAL_DAYS} days");
        }

        if cadence.weekly_tolerance_days < 0
            || cadence.weekly_tolerance_days >= cadence.nominal_interval_days
        {
            anyhow::bail!(
                "Weekly tolerance must be between 0 and {} days",
                cadence.nominal_interval_days - 1
            );
        }

        if !(1..=MAX_SPLIT_GAP_MULTIPLIER).contains(&cadence.split_gap_multiplier) {
            anyhow::bail!("Split gap multiplier must be between 1 and {MAX_SPLIT_GAP_MULTIPLIER}");
        }

        if !matches!(self.general.log_format.as_str(), "pretty" | "json") {
            anyhow::bail!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.general.log_format
            );
        }

        Ok(())
    }
}
