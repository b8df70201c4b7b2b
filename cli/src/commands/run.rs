//! Interactive session

use super::Context;
use crate::mock::{reference_fixtures, MockSouthbound};
use crate::prompt;
use anyhow::Result;
use pin_activator::PinActivator;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::io::BufReader;

pub async fn handle(ctx: &Context, no_mock: bool, mock_port: u16) -> Result<()> {
    let mut config = ctx.activator_config()?;

    let mock = if no_mock {
        None
    } else {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, mock_port));
        let server = MockSouthbound::start(addr, reference_fixtures()).await?;
        if ctx.global.southbound_url.is_some() {
            tracing::warn!("--southbound-url ignored while the mock southbound is running");
        }
        config.southbound_url = server.base_url();
        Some(server)
    };

    let activator = PinActivator::new(config)?;
    let session = prompt::run_session(
        &activator,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await;

    if let Some(server) = mock {
        server.shutdown().await?;
    }

    let summary = session?;
    tracing::debug!(?summary, "Interactive session closed");
    Ok(())
}
