//! Activator configuration

use crate::{ActivationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default southbound base URL
pub const DEFAULT_SOUTHBOUND_URL: &str = "http://localhost:8080";

/// Default orchestrator base URL
pub const DEFAULT_ORCHESTRATOR_URL: &str = "http://localhost:8090";

/// Default timeout for outbound calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Activator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivatorConfig {
    /// Southbound system base URL
    pub southbound_url: String,
    /// Orchestrator base URL (used by the HTTP status sink)
    pub orchestrator_url: String,
    /// Where activation statuses are reported
    pub status_sink: StatusSinkKind,
    /// Timeout for outbound calls; `None` waits indefinitely
    #[serde(with = "timeout_secs")]
    pub timeout: Option<Duration>,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        Self {
            southbound_url: DEFAULT_SOUTHBOUND_URL.into(),
            orchestrator_url: DEFAULT_ORCHESTRATOR_URL.into(),
            status_sink: StatusSinkKind::Log,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ActivatorConfig {
    /// Load from a JSON file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check both base URLs are absolute http(s) URLs
    pub fn validate(&self) -> Result<()> {
        check_base_url("southbound_url", &self.southbound_url)?;
        check_base_url("orchestrator_url", &self.orchestrator_url)?;
        if self.timeout == Some(Duration::ZERO) {
            return Err(ActivationError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Southbound activation endpoint
    pub fn activate_url(&self) -> Result<Url> {
        endpoint(&self.southbound_url, "activate")
    }

    /// Orchestrator status endpoint
    pub fn status_url(&self) -> Result<Url> {
        endpoint(&self.orchestrator_url, "status")
    }
}

fn check_base_url(field: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ActivationError::Config(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}

fn endpoint(base: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    Ok(url)
}

/// Status sink implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSinkKind {
    /// Log the status only
    #[default]
    Log,
    /// Log and POST the status to the orchestrator
    Http,
}

impl fmt::Display for StatusSinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSinkKind::Log => f.write_str("log"),
            StatusSinkKind::Http => f.write_str("http"),
        }
    }
}

impl FromStr for StatusSinkKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(StatusSinkKind::Log),
            "http" => Ok(StatusSinkKind::Http),
            other => Err(format!("unknown status sink: {other} (expected log or http)")),
        }
    }
}

mod timeout_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}
