//! Shared CLI utilities.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::{ConfigStore, DEFAULT_CONFIG_FILE};

/// Open the project's config, failing if `init` has not been run.
pub fn require_config(project_dir: &Path) -> Result<ConfigStore> {
    let config_path = project_dir.join(DEFAULT_CONFIG_FILE);
    if !config_path.exists() {
        anyhow::bail!("Configuration not found. Run 'flwr-k8s init' first.");
    }
    ConfigStore::open(&config_path)
        .with_context(|| format!("Failed loading {}", config_path.display()))
}

#[derive(Deserialize)]
struct PyProject {
    project: Option<PyProjectTable>,
}

#[derive(Deserialize)]
struct PyProjectTable {
    name: Option<String>,
}

/// Read `project.name` from `pyproject.toml`, if there is one.
///
/// An unreadable or malformed file is logged and treated as absent.
pub fn detect_project_name(project_dir: &Path) -> Option<String> {
    let pyproject = project_dir.join("pyproject.toml");
    let content = fs::read_to_string(&pyproject).ok()?;
    match toml::from_str::<PyProject>(&content) {
        Ok(parsed) => parsed.project.and_then(|project| project.name),
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", pyproject.display(), e);
            None
        }
    }
}
