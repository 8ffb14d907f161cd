//! Init command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

use super::utils::detect_project_name;
use crate::config::ConfigStore;

#[derive(Args)]
pub struct InitArgs {
    /// Project directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// SuperLink server address (e.g. 192.168.1.100:9092); prompted for when omitted
    #[arg(long, value_name = "HOST:PORT")]
    pub server_address: Option<String>,

    /// Docker Hub username
    #[arg(long, value_name = "USER", default_value = "cjhisey")]
    pub docker_username: String,

    /// Number of client replicas
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub replicas: u32,
}

pub fn run(args: InitArgs) -> Result<()> {
    let server_address = match args.server_address {
        Some(address) => address,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("SuperLink server address")
            .interact_text()?,
    };

    let mut config = ConfigStore::in_project(&args.project_dir)?;
    config.set("kubernetes.server_address", server_address);
    config.set("docker.username", args.docker_username);
    // Every replica must take part in fitting and evaluation.
    config.update([
        ("kubernetes.replicas", args.replicas),
        ("flower.min_fit_clients", args.replicas),
        ("flower.min_evaluate_clients", args.replicas),
        ("flower.min_available_clients", args.replicas),
    ]);

    if let Some(project_name) = detect_project_name(&args.project_dir) {
        tracing::debug!("Detected project name '{}' from pyproject.toml", project_name);
        config.set("project.name", project_name);
    }

    config.save().context("Failed writing configuration")?;

    println!("{} Configuration saved to: {}", style("✓").green(), config.path().display());
    println!();
    println!("{}", style("Next steps:").yellow());
    println!("  1. Review and edit configuration: {}", style("flwr-k8s-config.yaml").cyan());
    println!("  2. Generate deployment files: {}", style("flwr-k8s generate").cyan());
    println!("  3. Build the image: {}", style("./build.sh").cyan());
    println!("  4. Deploy to Kubernetes: {}", style("./deploy.sh").cyan());

    Ok(())
}
