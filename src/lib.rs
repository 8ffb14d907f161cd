//! flwr-k8s-deploy: deployment files for Flower federated learning clients
//!
//! Merges user settings into a layered YAML configuration and renders a
//! Dockerfile, Kubernetes manifests, and helper scripts from templates.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod utils;

pub use config::ConfigStore;
pub use error::{ConfigError, TemplateError};
pub use render::{build_context, RenderContext, Strictness, TemplateGenerator};
