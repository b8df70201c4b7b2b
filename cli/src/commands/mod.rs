//! CLI Commands

pub mod activate;
pub mod config;
pub mod mock;
pub mod run;

use crate::args::{Commands, GlobalArgs};
use crate::config::{Config, Overrides};
use crate::output::OutputFormat;
use anyhow::{anyhow, Result};
use pin_activator::ActivatorConfig;

/// Global flags plus the selected profile
pub struct Context {
    pub global: GlobalArgs,
    pub profile: Config,
}

impl Context {
    pub fn load(global: GlobalArgs) -> Result<Self> {
        let profile = Config::load(global.profile.as_deref())?;
        Ok(Self { global, profile })
    }

    /// Load the profile only when `command` reads it
    pub fn for_command(global: GlobalArgs, command: &Commands) -> Result<Self> {
        if command.needs_profile() {
            Self::load(global)
        } else {
            Ok(Self { global, profile: Config::default() })
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            southbound_url: self.global.southbound_url.clone(),
            orchestrator_url: self.global.orchestrator_url.clone(),
            status_sink: self.global.status_sink,
            timeout_secs: self.global.timeout_secs,
        }
    }

    pub fn activator_config(&self) -> Result<ActivatorConfig> {
        self.profile.resolve(&self.overrides())
    }

    pub fn format(&self) -> Result<OutputFormat> {
        match (self.global.format, &self.profile.default_format) {
            (Some(format), _) => Ok(format),
            (None, Some(raw)) => raw.parse().map_err(|e: String| anyhow!(e)),
            (None, None) => Ok(OutputFormat::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ConfigCommands;

    #[test]
    fn test_config_init_uses_default_profile() {
        let command = Commands::Config { action: ConfigCommands::Init };
        let ctx = Context::for_command(GlobalArgs::default(), &command).unwrap();
        assert_eq!(ctx.profile, Config::default());
        assert_eq!(ctx.format().unwrap(), OutputFormat::Table);
    }
}
