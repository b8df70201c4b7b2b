//! PIN Activator CLI
//!
//! # Usage
//!
//! ```bash
//! pin-activator run
//! pin-activator activate --customer-id 12345 --mac-address AA:BB:CC:DD:EE:FF
//! pin-activator --status-sink http --orchestrator-url http://localhost:8090 run --no-mock
//! pin-activator mock --port 8080
//! pin-activator config set southbound_url http://southbound.local:8080
//! ```

use clap::Parser;
use pin_activator_cli::args::{Cli, Commands};
use pin_activator_cli::commands::{self, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or_default();
    let result = match Context::for_command(cli.global, &command) {
        Ok(ctx) => match command {
            Commands::Run { no_mock, mock_port } => {
                commands::run::handle(&ctx, no_mock, mock_port).await
            }
            Commands::Activate { customer_id, mac_address } => {
                commands::activate::handle(&ctx, customer_id, mac_address).await
            }
            Commands::Mock { port } => commands::mock::handle(port).await,
            Commands::Config { action } => commands::config::handle(&ctx, action).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
