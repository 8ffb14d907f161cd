//! Built-in configuration defaults

use serde_yaml::{Mapping, Value};

/// Build a fresh copy of the default configuration tree.
///
/// Every call returns an independent value, so stores never alias each
/// other's defaults.
pub fn default_config() -> Mapping {
    section([
        (
            "project",
            section_value([("name", "predictive-maintenance".into()), ("version", "1.0.0".into())]),
        ),
        (
            "docker",
            section_value([
                ("registry", "docker.io".into()),
                ("username", "cjhisey".into()),
                ("image_name", "flwr-client".into()),
                ("tag", "latest".into()),
                ("platforms", vec!["linux/amd64", "linux/arm64"].into()),
            ]),
        ),
        (
            "kubernetes",
            section_value([
                ("namespace", "default".into()),
                ("replicas", 2.into()),
                ("server_address", "192.168.1.100:9092".into()),
            ]),
        ),
        (
            "flower",
            section_value([
                ("num_server_rounds", 10.into()),
                ("local_epochs", 2.into()),
                ("min_fit_clients", 2.into()),
                ("min_evaluate_clients", 2.into()),
                ("min_available_clients", 2.into()),
            ]),
        ),
        (
            "resources",
            section_value([
                ("requests", section_value([("memory", "512Mi".into()), ("cpu", "250m".into())])),
                ("limits", section_value([("memory", "2Gi".into()), ("cpu", "1000m".into())])),
            ]),
        ),
    ])
}

fn section<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries.into_iter().map(|(key, value)| (Value::from(key), value)).collect()
}

fn section_value<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(section(entries))
}
