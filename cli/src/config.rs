//! CLI Configuration
//!
//! Profile files live under `~/.pin-activator/` as TOML. Values set here are
//! overridden by command-line flags and environment variables.

use crate::output::OutputFormat;
use anyhow::{anyhow, bail, Context, Result};
use pin_activator::{ActivatorConfig, StatusSinkKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by `config get` / `config set`
pub const KEYS: [&str; 5] = [
    "southbound_url",
    "orchestrator_url",
    "status_sink",
    "timeout_secs",
    "default_format",
];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub southbound_url: Option<String>,
    pub orchestrator_url: Option<String>,
    pub status_sink: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_format: Option<String>,
}

/// Values given on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub southbound_url: Option<String>,
    pub orchestrator_url: Option<String>,
    pub status_sink: Option<StatusSinkKind>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    pub fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".pin-activator").join(filename))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "southbound_url" => self.southbound_url.clone(),
            "orchestrator_url" => self.orchestrator_url.clone(),
            "status_sink" => self.status_sink.clone(),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            "default_format" => self.default_format.clone(),
            _ => bail!("Unknown config key: {}", key),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "southbound_url" => self.southbound_url = Some(value),
            "orchestrator_url" => self.orchestrator_url = Some(value),
            "status_sink" => {
                value.parse::<StatusSinkKind>().map_err(|e| anyhow!(e))?;
                self.status_sink = Some(value);
            }
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("timeout_secs must be a whole number, got {value}"))?;
                self.timeout_secs = Some(secs);
            }
            "default_format" => {
                value.parse::<OutputFormat>().map_err(|e| anyhow!(e))?;
                self.default_format = Some(value);
            }
            _ => bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Merge overrides, profile values and library defaults
    pub fn resolve(&self, overrides: &Overrides) -> Result<ActivatorConfig> {
        let defaults = ActivatorConfig::default();

        let status_sink = match (&overrides.status_sink, &self.status_sink) {
            (Some(kind), _) => *kind,
            (None, Some(raw)) => raw.parse::<StatusSinkKind>().map_err(|e| anyhow!(e))?,
            (None, None) => defaults.status_sink,
        };
        // 0 disables the timeout
        let timeout = match overrides.timeout_secs.or(self.timeout_secs) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.timeout,
        };

        let config = ActivatorConfig {
            southbound_url: overrides
                .southbound_url
                .clone()
                .or_else(|| self.southbound_url.clone())
                .unwrap_or(defaults.southbound_url),
            orchestrator_url: overrides
                .orchestrator_url
                .clone()
                .or_else(|| self.orchestrator_url.clone())
                .unwrap_or(defaults.orchestrator_url),
            status_sink,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }
}
