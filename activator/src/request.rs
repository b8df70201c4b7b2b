//! Activation request

use crate::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CUSTOMER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid customer id pattern"));

static MAC_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("valid MAC address pattern")
});

/// Request body sent to the southbound `/activate` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    /// Numeric customer id
    pub customer_id: String,
    /// Terminal MAC address, as entered
    pub mac_address: String,
}

impl ActivationRequest {
    /// Build a validated request
    pub fn new(
        customer_id: impl Into<String>,
        mac_address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let customer_id = validate_customer_id(customer_id.into())?;
        let mac_address = validate_mac_address(mac_address.into())?;
        Ok(Self { customer_id, mac_address })
    }
}

/// Check a customer id is a non-empty run of ASCII digits
pub fn validate_customer_id(customer_id: String) -> Result<String, ValidationError> {
    if CUSTOMER_ID_RE.is_match(&customer_id) {
        Ok(customer_id)
    } else {
        Err(ValidationError::InvalidCustomerId(customer_id))
    }
}

/// Check a MAC address is six hex octets separated by ':' or '-'
pub fn validate_mac_address(mac_address: String) -> Result<String, ValidationError> {
    if MAC_ADDRESS_RE.is_match(&mac_address) {
        Ok(mac_address)
    } else {
        Err(ValidationError::InvalidMacAddress(mac_address))
    }
}
