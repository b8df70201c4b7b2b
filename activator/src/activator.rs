//! PIN terminal activation

use crate::config::{ActivatorConfig, StatusSinkKind};
use crate::outcome::{ActivationOutcome, SouthboundResponse};
use crate::request::ActivationRequest;
use crate::sink::{HttpSink, LogSink, StatusSink};
use crate::{ActivationError, Result};
use std::sync::Arc;
use url::Url;

/// Sends activation requests to the southbound system and reports outcomes
pub struct PinActivator {
    config: ActivatorConfig,
    activate_url: Url,
    http: reqwest::Client,
    sink: Arc<dyn StatusSink>,
}

impl PinActivator {
    /// Create an activator with the sink selected by `config.status_sink`
    pub fn new(config: ActivatorConfig) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(&config)?;
        let sink: Arc<dyn StatusSink> = match config.status_sink {
            StatusSinkKind::Log => Arc::new(LogSink),
            StatusSinkKind::Http => Arc::new(HttpSink::new(http.clone(), config.status_url()?)),
        };
        Self::assemble(config, http, sink)
    }

    /// Create an activator reporting to a caller-supplied sink
    pub fn with_sink(config: ActivatorConfig, sink: Arc<dyn StatusSink>) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(&config)?;
        Self::assemble(config, http, sink)
    }

    fn assemble(
        config: ActivatorConfig,
        http: reqwest::Client,
        sink: Arc<dyn StatusSink>,
    ) -> Result<Self> {
        let activate_url = config.activate_url()?;
        Ok(Self { config, activate_url, http, sink })
    }

    /// Active configuration
    pub fn config(&self) -> &ActivatorConfig {
        &self.config
    }

    /// Activate a terminal.
    ///
    /// On a southbound response the outcome is reported to the sink once and
    /// returned. A transport failure returns [`ActivationError::Transport`]
    /// and nothing is reported.
    pub async fn activate(&self, request: &ActivationRequest) -> Result<ActivationOutcome> {
        let customer_id = request.customer_id.as_str();
        tracing::debug!(customer_id, mac_address = %request.mac_address, url = %self.activate_url, "Sending activation request");

        let response = self
            .http
            .post(self.activate_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| ActivationError::Transport {
                customer_id: customer_id.to_string(),
                source,
            })?;

        let classified = SouthboundResponse::from(response.status());
        match classified {
            SouthboundResponse::Activated => {
                tracing::info!(customer_id, "{}", classified.describe(customer_id));
            }
            _ => {
                tracing::error!(customer_id, "{}", classified.describe(customer_id));
            }
        }

        let outcome = classified.outcome();
        self.sink.report(customer_id, outcome).await;
        Ok(outcome)
    }

    /// Activate a terminal, logging and absorbing any failure.
    ///
    /// Returns `None` when no outcome could be determined.
    pub async fn activate_pin_terminal(
        &self,
        request: &ActivationRequest,
    ) -> Option<ActivationOutcome> {
        match self.activate(request).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(
                    customer_id = %request.customer_id,
                    error = %e,
                    "Unexpected error while activating PIN terminal for customerId: {}",
                    request.customer_id
                );
                None
            }
        }
    }
}

fn build_http_client(config: &ActivatorConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("pin-activator/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ActivationError::Config(format!("failed to build HTTP client: {e}")))
}
