//! Command-line interface for flwr-k8s
//!
//! Provides `init`, `generate`, and `config` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod generate;
mod init;
mod utils;

/// Flower Kubernetes deployment tool
///
/// Generate Docker and Kubernetes deployment files for Flower federated
/// learning clients.
#[derive(Parser)]
#[command(name = "flwr-k8s")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the deployment configuration for a project
    Init(init::InitArgs),

    /// Generate the Dockerfile, Kubernetes manifests, and helper scripts
    Generate(generate::GenerateArgs),

    /// Show or edit the deployment configuration
    Config(config::ConfigArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Init(args) => init::run(args),
        Commands::Generate(args) => generate::run(args),
        Commands::Config(args) => config::run(args),
    }
}
