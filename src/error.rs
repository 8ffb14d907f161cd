//! Error types for configuration handling and file generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or persisting the deployment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The persisted file exists but could not be read.
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted file is not valid YAML.
    #[error("failed to parse configuration {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// The configuration could not be written back to disk.
    #[error("failed to save configuration to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while rendering templates or writing generated files.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No source exists for the template in the directory or built-in set.
    #[error("template '{name}' not found in {location}")]
    NotFound { name: String, location: String },

    #[error("failed to read template '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A placeholder referenced a variable absent from the context.
    #[error("template '{template}' references undefined variable '{variable}'")]
    Render { template: String, variable: String },

    /// A `{{ ... }}` block whose content is not a variable name.
    #[error("template '{template}' has a malformed placeholder '{placeholder}'")]
    Malformed { template: String, placeholder: String },

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
