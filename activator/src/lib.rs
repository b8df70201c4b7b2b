//! PIN Activator - Point-of-Sale Terminal Activation
//!
//! Activates a PIN terminal for a customer by forwarding the request to the
//! southbound registration system and reporting the resulting status.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           PIN ACTIVATOR                                 │
//! │                                                                         │
//! │  ┌──────────────┐      ┌──────────────┐      ┌──────────────────────┐  │
//! │  │  Activation  │      │  Southbound  │      │   Decision           │  │
//! │  │  Request     │ ───▶ │  POST        │ ───▶ │   201 → ACTIVE       │  │
//! │  │  (validated) │      │  /activate   │      │   404/409 → INACTIVE │  │
//! │  └──────────────┘      └──────────────┘      │   * → ERROR          │  │
//! │                                              └──────────┬───────────┘  │
//! │                                                         │              │
//! │                        ┌────────────────────────────────▼───────────┐  │
//! │                        │              Status Sink                   │  │
//! │                        │     Log (default)  |  HTTP orchestrator    │  │
//! │                        └────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pin_activator::{ActivationRequest, ActivatorConfig, PinActivator};
//!
//! # async fn run() -> pin_activator::Result<()> {
//! let activator = PinActivator::new(ActivatorConfig::default())?;
//! let request = ActivationRequest::new("12345", "AA:BB:CC:DD:EE:FF")?;
//! let outcome = activator.activate(&request).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod activator;
pub mod config;
pub mod outcome;
pub mod request;
pub mod sink;

use thiserror::Error;

pub use activator::PinActivator;
pub use config::{ActivatorConfig, StatusSinkKind};
pub use outcome::{decide, ActivationOutcome, SouthboundResponse};
pub use request::ActivationRequest;
pub use sink::{HttpSink, LogSink, StatusSink};

/// Rejected activation input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Customer id is empty or not purely numeric
    #[error("invalid customer id: {0:?}")]
    InvalidCustomerId(String),
    /// MAC address is not six hex octets separated by ':' or '-'
    #[error("invalid MAC address: {0:?}")]
    InvalidMacAddress(String),
}

impl ValidationError {
    /// Message shown to an interactive user
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidCustomerId(_) => {
                "Invalid customer ID. Please enter a valid numeric ID."
            }
            ValidationError::InvalidMacAddress(_) => {
                "Invalid MAC Address. Please enter in format AA:BB:CC:DD:EE:FF."
            }
        }
    }
}

/// Activator error types
#[derive(Debug, Error)]
pub enum ActivationError {
    /// Input rejected before reaching the southbound system
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The southbound call itself failed; no outcome was produced
    #[error("transport error while activating PIN terminal for customerId {customer_id}: {source}")]
    Transport {
        /// Customer the failed attempt belonged to
        customer_id: String,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ActivationError {
    /// Customer id attached to a transport failure
    pub fn customer_id(&self) -> Option<&str> {
        match self {
            ActivationError::Transport { customer_id, .. } => Some(customer_id),
            _ => None,
        }
    }

    /// Returns true if the southbound system could not be reached
    pub fn is_transport(&self) -> bool {
        matches!(self, ActivationError::Transport { .. })
    }
}

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_user_messages() {
        let err = ValidationError::InvalidCustomerId("abc".into());
        assert_eq!(err.user_message(), "Invalid customer ID. Please enter a valid numeric ID.");

        let err = ValidationError::InvalidMacAddress("zz".into());
        assert_eq!(
            err.user_message(),
            "Invalid MAC Address. Please enter in format AA:BB:CC:DD:EE:FF."
        );
    }

    #[test]
    fn test_validation_converts_into_activation_error() {
        let err: ActivationError = ValidationError::InvalidCustomerId("x1".into()).into();
        assert!(!err.is_transport());
        assert!(err.customer_id().is_none());
        assert_eq!(err.to_string(), "invalid customer id: \"x1\"");
    }
}
