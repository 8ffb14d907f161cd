//! Template context derived from the configuration

use crate::config::ConfigStore;
use crate::utils::scalar_text;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Flat variable map handed to the templates.
pub type RenderContext = BTreeMap<String, String>;

/// Context variables and the config paths they are read from.
const SCALAR_VARIABLES: &[(&str, &str)] = &[
    ("project_name", "project.name"),
    ("project_version", "project.version"),
    ("docker_registry", "docker.registry"),
    ("docker_username", "docker.username"),
    ("image_name", "docker.image_name"),
    ("tag", "docker.tag"),
    ("namespace", "kubernetes.namespace"),
    ("replicas", "kubernetes.replicas"),
    ("server_address", "kubernetes.server_address"),
    ("num_server_rounds", "flower.num_server_rounds"),
    ("local_epochs", "flower.local_epochs"),
    ("min_fit_clients", "flower.min_fit_clients"),
    ("min_evaluate_clients", "flower.min_evaluate_clients"),
    ("min_available_clients", "flower.min_available_clients"),
];

/// Build the rendering context for a store.
///
/// Missing config values are left out of the context rather than defaulted,
/// so strict rendering names them.
pub fn build_context(store: &ConfigStore) -> RenderContext {
    let mut context = RenderContext::new();

    for (variable, path) in SCALAR_VARIABLES {
        if let Some(text) = store.get(path).and_then(scalar_text) {
            context.insert((*variable).to_string(), text);
        }
    }

    if let Some(project_name) = context.get("project_name") {
        let package_name = package_name_for(project_name);
        context.insert("package_name".to_string(), package_name);
    }

    if let (Some(username), Some(image), Some(tag)) =
        (context.get("docker_username"), context.get("image_name"), context.get("tag"))
    {
        let full_image = format!("{username}/{image}:{tag}");
        context.insert("full_image".to_string(), full_image);
    }

    if let Some(platforms) = store.get("docker.platforms") {
        let joined = match platforms {
            Value::Sequence(items) => {
                items.iter().filter_map(scalar_text).collect::<Vec<_>>().join(",")
            }
            other => scalar_text(other).unwrap_or_default(),
        };
        context.insert("platforms".to_string(), joined);
    }

    if let Some(resources) = store.get("resources").and_then(Value::as_mapping) {
        insert_nested(&mut context, "resources", resources);
    }

    context
}

/// Python package name for a project: hyphens become underscores.
pub fn package_name_for(project_name: &str) -> String {
    project_name.replace('-', "_")
}

fn insert_nested(context: &mut RenderContext, prefix: &str, mapping: &Mapping) {
    for (key, value) in mapping {
        let Some(key) = scalar_text(key) else { continue };
        let full_key = format!("{prefix}.{key}");
        match value {
            Value::Mapping(nested) => insert_nested(context, &full_key, nested),
            other => {
                if let Some(text) = scalar_text(other) {
                    context.insert(full_key, text);
                }
            }
        }
    }
}
