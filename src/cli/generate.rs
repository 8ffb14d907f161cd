//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::fs;
use std::path::PathBuf;

use super::utils::require_config;
use crate::render::{build_context, Strictness, TemplateGenerator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Project directory containing flwr-k8s-config.yaml
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Output directory for generated files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory of custom templates (defaults to the built-in set)
    #[arg(long, value_name = "DIR", env = "FLWR_K8S_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Render undefined template variables as empty instead of failing
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = require_config(&args.project_dir)?;
    let context = build_context(&config);

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed creating {}", args.output_dir.display()))?;
    let output_dir = args.output_dir.canonicalize()?;

    let strictness = if args.lenient { Strictness::Lenient } else { Strictness::Strict };
    let generator = match args.template_dir {
        Some(dir) => TemplateGenerator::new(dir),
        None => TemplateGenerator::embedded(),
    }
    .strictness(strictness);
    tracing::debug!("Rendering templates from {:?}", generator.source());

    let written = generator
        .generate_all(&context, &output_dir)
        .context("Error generating files")?;

    println!("{}", style("Generated files:").green());
    for path in &written {
        println!("  {}", path.display());
    }
    println!();
    println!("{}", style("Next steps:").yellow());
    println!("  Build image: {}", style("./build.sh").cyan());
    println!("  Deploy: {}", style("./deploy.sh").cyan());

    Ok(())
}
