use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::ports::{DEFAULT_LOG_CAPACITY, DEFAULT_USER_AGENT};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// General settings: probe cadence, timeouts, log capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    #[serde(default = "default_warmup")]
    pub warmup_secs: u64,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// One `[[targets]]` entry, registered when the daemon starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Notification channels and the optional per-target text log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub terminal: bool,
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Directory of the per-target text logs (tilde-expanded at point of use).
    #[serde(default)]
    pub data_dir: Option<String>,
}

// --- Defaults ---

const fn default_interval() -> u64 {
    60
}

const fn default_warmup() -> u64 {
    5
}

const fn default_probe_timeout() -> u64 {
    10
}

const fn default_log_capacity() -> usize {
    DEFAULT_LOG_CAPACITY
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            warmup_secs: default_warmup(),
            probe_timeout_secs: default_probe_timeout(),
            log_capacity: default_log_capacity(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            terminal: default_true(),
            webhook_url: None,
            data_dir: None,
        }
    }
}

/// Runtime knobs derived from [`GeneralConfig`], with out-of-range values clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub interval: Duration,
    pub warmup: Duration,
    pub probe_timeout: Duration,
    pub log_capacity: usize,
    pub user_agent: String,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self::from(&GeneralConfig::default())
    }
}

impl From<&GeneralConfig> for MonitorSettings {
    fn from(config: &GeneralConfig) -> Self {
        let user_agent = config.user_agent.trim();
        Self {
            interval: Duration::from_secs(config.interval_secs.max(1)),
            warmup: Duration::from_secs(config.warmup_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs.max(1)),
            log_capacity: config.log_capacity.max(1),
            user_agent: if user_agent.is_empty() {
                DEFAULT_USER_AGENT.into()
            } else {
                user_agent.into()
            },
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from the default path, creating it with defaults if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    #[must_use]
    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings::from(&self.general)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("pulsewatch").join("config.toml"))
    }
}
