use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Default unused-age threshold in days
pub const DEFAULT_UNUSED_DAYS: u32 = 60;

/// Default retention window in days
pub const DEFAULT_RETENTION_DAYS: u32 = 20;

// ============================================================================
// Config
// ============================================================================

/// Tool configuration, loaded from `config.toml` in the config directory.
///
/// Every value has a default, so a missing config file is not an error;
/// per-invocation CLI flags override whatever is configured here.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub quarantine: QuarantineConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanConfig {
    /// A file is considered unused when its last access is older than this
    #[serde(default = "default_unused_days")]
    pub unused_days: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuarantineConfig {
    /// Quarantined files older than this are eligible for permanent deletion
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// Override the quarantine directory (supports ~ and $VAR expansion)
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_unused_days() -> u32 {
    DEFAULT_UNUSED_DAYS
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unused_days: DEFAULT_UNUSED_DAYS,
        }
    }
}

impl Default for QuarantineConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
            dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        Ok(paths::config_dir()?.join("config.toml"))
    }

    /// Load config.toml, falling back to defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            log::debug!("Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save config.toml
    pub fn save(&self) -> Result<()> {
        let dir = paths::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolve the quarantine directory.
    ///
    /// Priority: `CLEANSHELF_QUARANTINE_DIR` env var, then the configured
    /// `quarantine.dir`, then the default under the home directory.
    pub fn quarantine_dir(&self) -> Result<PathBuf> {
        if std::env::var(paths::ENV_QUARANTINE_DIR).is_ok() {
            return paths::quarantine_dir();
        }
        if let Some(dir) = &self.quarantine.dir {
            return Ok(paths::expand(dir));
        }
        paths::quarantine_dir()
    }
}

// ============================================================================
// Tests
// ============================================================================
