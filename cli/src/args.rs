//! Command-line arguments

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use pin_activator::StatusSinkKind;

#[derive(Parser)]
#[command(name = "pin-activator")]
#[command(version)]
#[command(about = "Activate point-of-sale PIN terminals", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Southbound system base URL
    #[arg(long, global = true, env = "PIN_ACTIVATOR_SOUTHBOUND_URL")]
    pub southbound_url: Option<String>,

    /// Orchestrator base URL (used with `--status-sink http`)
    #[arg(long, global = true, env = "PIN_ACTIVATOR_ORCHESTRATOR_URL")]
    pub orchestrator_url: Option<String>,

    /// Where activation statuses are reported
    #[arg(long, global = true, env = "PIN_ACTIVATOR_STATUS_SINK")]
    pub status_sink: Option<StatusSinkKind>,

    /// Timeout for outbound calls, in seconds (0 disables it)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Profile name from config file
    #[arg(long, short, global = true)]
    pub profile: Option<String>,

    /// Output format
    #[arg(long, short, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Prompt for customer ids and MAC addresses and activate each terminal
    Run {
        /// Use the configured southbound instead of a local mock
        #[arg(long)]
        no_mock: bool,
        /// Port for the local mock southbound
        #[arg(long, default_value_t = 8080)]
        mock_port: u16,
    },
    /// Activate a single terminal
    Activate {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        mac_address: String,
    },
    /// Serve the mock southbound until interrupted
    Mock {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

impl Commands {
    /// Whether the command reads the profile file. `config init` must work
    /// even when the existing file is unreadable, and `mock` never uses it.
    pub fn needs_profile(&self) -> bool {
        !matches!(
            self,
            Commands::Mock { .. } | Commands::Config { action: ConfigCommands::Init }
        )
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run { no_mock: false, mock_port: 8080 }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// Show the effective configuration
    Show,
    /// Initialize configuration
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_activate() {
        let cli = Cli::parse_from([
            "pin-activator",
            "--status-sink",
            "http",
            "activate",
            "--customer-id",
            "12345",
            "--mac-address",
            "AA:BB:CC:DD:EE:FF",
            "-f",
            "json",
        ]);
        assert_eq!(cli.global.status_sink, Some(StatusSinkKind::Http));
        assert_eq!(cli.global.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Some(Commands::Activate { ref customer_id, .. }) if customer_id == "12345"
        ));
    }

    #[test]
    fn test_config_init_skips_profile() {
        let cli = Cli::parse_from(["pin-activator", "config", "init"]);
        assert!(!cli.command.unwrap().needs_profile());

        let cli = Cli::parse_from(["pin-activator", "config", "show"]);
        assert!(cli.command.unwrap().needs_profile());
        assert!(Commands::default().needs_profile());
    }

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::parse_from(["pin-activator"]);
        let command = cli.command.unwrap_or_default();
        assert!(matches!(command, Commands::Run { no_mock: false, mock_port: 8080 }));
    }
}
