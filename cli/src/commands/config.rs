//! Config commands

use super::Context;
use crate::args::ConfigCommands;
use crate::config::{Config, KEYS};
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct Setting {
    key: String,
    value: String,
}

pub async fn handle(ctx: &Context, action: ConfigCommands) -> Result<()> {
    let profile = ctx.global.profile.as_deref();
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(profile)?;
            config.set(&key, value)?;
            config.save(profile)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let value = ctx.profile.get(&key)?;
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::Show => {
            let effective = ctx.activator_config()?;
            let mut rows = vec![
                Setting { key: "southbound_url".into(), value: effective.southbound_url },
                Setting { key: "orchestrator_url".into(), value: effective.orchestrator_url },
                Setting { key: "status_sink".into(), value: effective.status_sink.to_string() },
                Setting {
                    key: "timeout_secs".into(),
                    value: effective
                        .timeout
                        .map(|t| t.as_secs().to_string())
                        .unwrap_or_else(|| "(none)".into()),
                },
            ];
            let remaining: Vec<&str> = KEYS
                .iter()
                .copied()
                .filter(|k| !rows.iter().any(|r| r.key == *k))
                .collect();
            for key in remaining {
                let value = ctx.profile.get(key)?.unwrap_or_else(|| "(not set)".into());
                rows.push(Setting { key: key.to_string(), value });
            }
            ctx.format()?.print(&rows)?;
        }
    }
    Ok(())
}
