//! One-shot activation

use super::Context;
use anyhow::{anyhow, Result};
use pin_activator::{ActivationOutcome, ActivationRequest, PinActivator};
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
pub struct ActivationReport {
    pub customer_id: String,
    pub mac_address: String,
    pub status: ActivationOutcome,
}

pub async fn handle(ctx: &Context, customer_id: String, mac_address: String) -> Result<()> {
    let request = ActivationRequest::new(customer_id, mac_address)
        .map_err(|e| anyhow!("{}", e.user_message()))?;
    let activator = PinActivator::new(ctx.activator_config()?)?;

    let status = activator
        .activate_pin_terminal(&request)
        .await
        .ok_or_else(|| anyhow!("activation failed for customerId {}", request.customer_id))?;

    let report = ActivationReport {
        customer_id: request.customer_id,
        mac_address: request.mac_address,
        status,
    };
    ctx.format()?.print(&[report])
}
