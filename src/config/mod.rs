//! Deployment configuration
//!
//! A YAML-backed tree seeded from built-in defaults, overlaid with the
//! project's `flwr-k8s-config.yaml` when present, and addressed by dotted
//! paths such as `kubernetes.replicas`.

pub mod defaults;
pub mod merge;
pub mod store;

pub use defaults::default_config;
pub use merge::merge;
pub use store::{ConfigStore, DEFAULT_CONFIG_FILE};
