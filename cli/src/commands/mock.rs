//! Standalone mock southbound

use crate::mock::{reference_fixtures, MockSouthbound};
use anyhow::Result;
use std::net::{Ipv4Addr, SocketAddr};

pub async fn handle(port: u16) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let server = MockSouthbound::start(addr, reference_fixtures()).await?;
    println!("Mock southbound listening on {} (Ctrl-C to stop)", server.base_url());

    tokio::signal::ctrl_c().await?;
    server.shutdown().await
}
