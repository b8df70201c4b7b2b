//! Activation decision
//!
//! Maps a southbound status code onto the closed set of activation outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activation outcome reported for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationOutcome {
    /// Terminal activated for this customer
    Active,
    /// Terminal not registered, or bound to another customer
    Inactive,
    /// Unclassified southbound response
    Error,
}

impl ActivationOutcome {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationOutcome::Active => "ACTIVE",
            ActivationOutcome::Inactive => "INACTIVE",
            ActivationOutcome::Error => "ERROR",
        }
    }
}

impl fmt::Display for ActivationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivationOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(ActivationOutcome::Active),
            "INACTIVE" => Ok(ActivationOutcome::Inactive),
            "ERROR" => Ok(ActivationOutcome::Error),
            other => Err(format!("unknown activation outcome: {other}")),
        }
    }
}

/// Classified response of the southbound `/activate` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SouthboundResponse {
    /// 201 Created
    Activated,
    /// 404 Not Found
    NotRegistered,
    /// 409 Conflict
    AlreadyBound,
    /// Anything else
    Unexpected(i32),
}

impl SouthboundResponse {
    /// Classify a raw status code
    pub fn classify(status_code: i32) -> Self {
        match status_code {
            201 => SouthboundResponse::Activated,
            404 => SouthboundResponse::NotRegistered,
            409 => SouthboundResponse::AlreadyBound,
            other => SouthboundResponse::Unexpected(other),
        }
    }

    /// Outcome this response maps to
    pub fn outcome(&self) -> ActivationOutcome {
        match self {
            SouthboundResponse::Activated => ActivationOutcome::Active,
            SouthboundResponse::NotRegistered | SouthboundResponse::AlreadyBound => {
                ActivationOutcome::Inactive
            }
            SouthboundResponse::Unexpected(_) => ActivationOutcome::Error,
        }
    }

    /// Log line describing this response for a customer
    pub fn describe(&self, customer_id: &str) -> String {
        match self {
            SouthboundResponse::Activated => format!(
                "The PIN terminal was successfully activated for customerId: {customer_id}"
            ),
            SouthboundResponse::NotRegistered => format!(
                "The PIN terminal is not registered in the system for customerId: {customer_id}"
            ),
            SouthboundResponse::AlreadyBound => format!(
                "The PIN terminal is already attached to a different customer for customerId: {customer_id}"
            ),
            SouthboundResponse::Unexpected(code) => {
                format!("Unexpected status code: {code} for customerId: {customer_id}")
            }
        }
    }
}

impl From<reqwest::StatusCode> for SouthboundResponse {
    fn from(status: reqwest::StatusCode) -> Self {
        SouthboundResponse::classify(i32::from(status.as_u16()))
    }
}

/// Decide the activation outcome for a southbound status code.
///
/// Total over all integers: only 201 activates, 404 and 409 are inactive,
/// every other value is an error.
pub fn decide(status_code: i32) -> ActivationOutcome {
    SouthboundResponse::classify(status_code).outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_is_active() {
        assert_eq!(decide(201), ActivationOutcome::Active);
    }

    #[test]
    fn test_not_found_and_conflict_are_inactive() {
        assert_eq!(decide(404), ActivationOutcome::Inactive);
        assert_eq!(decide(409), ActivationOutcome::Inactive);
    }

    #[test]
    fn test_uncovered_codes_are_error() {
        for code in [200, 400, 500, 0, -1, 999, 202, 403, i32::MIN, i32::MAX] {
            assert_eq!(decide(code), ActivationOutcome::Error, "status {code}");
        }
    }

    #[test]
    fn test_only_201_maps_to_active() {
        let active: Vec<i32> = (-10..1000)
            .filter(|c| decide(*c) == ActivationOutcome::Active)
            .collect();
        assert_eq!(active, vec![201]);
    }

    #[test]
    fn test_decide_is_repeatable() {
        for code in [201, 404, 409, 500] {
            assert_eq!(decide(code), decide(code));
        }
    }

    #[test]
    fn test_classify_from_status_code() {
        let resp = SouthboundResponse::from(reqwest::StatusCode::CONFLICT);
        assert_eq!(resp, SouthboundResponse::AlreadyBound);

        let resp = SouthboundResponse::from(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp, SouthboundResponse::Unexpected(503));
        assert_eq!(resp.outcome(), ActivationOutcome::Error);
    }

    #[test]
    fn test_describe_mentions_customer() {
        assert_eq!(
            SouthboundResponse::Unexpected(500).describe("42"),
            "Unexpected status code: 500 for customerId: 42"
        );
        assert!(SouthboundResponse::AlreadyBound
            .describe("11111")
            .ends_with("customerId: 11111"));
    }

    #[test]
    fn test_outcome_wire_format() {
        assert_eq!(ActivationOutcome::Inactive.to_string(), "INACTIVE");
        assert_eq!(
            serde_json::to_string(&ActivationOutcome::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!("error".parse::<ActivationOutcome>(), Ok(ActivationOutcome::Error));
        assert!("PENDING".parse::<ActivationOutcome>().is_err());
    }
}
