//! Config command implementation

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use std::path::PathBuf;

use super::utils::require_config;
use crate::utils::{parse_scalar, scalar_text};

#[derive(Args)]
pub struct ConfigArgs {
    /// Project directory containing flwr-k8s-config.yaml
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print every setting
    Show {
        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single value by dotted key (e.g. kubernetes.replicas)
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Set a value by dotted key and save the configuration
    Set {
        #[arg(value_name = "KEY")]
        key: String,

        /// Value, read as a YAML scalar (numbers and booleans keep their type)
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let mut config = require_config(&args.project_dir)?;

    match args.command {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config.data())?);
                return Ok(());
            }
            let rows = config.flatten();
            let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            println!("{}", style(format!("{:<width$}  Value", "Setting")).bold());
            for (key, value) in rows {
                println!("{}  {}", style(format!("{key:<width$}")).cyan(), style(value).green());
            }
        }
        ConfigCommand::Get { key } => {
            let value = config.get(&key).with_context(|| format!("Key not found: {key}"))?;
            match scalar_text(value) {
                Some(text) => println!("{text}"),
                None => print!("{}", serde_yaml::to_string(value)?),
            }
        }
        ConfigCommand::Set { key, value } => {
            let value = parse_scalar(&value);
            let shown = scalar_text(&value).unwrap_or_default();
            config.set(&key, value);
            config.save().context("Failed writing configuration")?;
            println!("{} {} = {}", style("✓").green(), key, shown);
        }
    }

    Ok(())
}
