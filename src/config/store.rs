//! Persisted configuration store

use crate::config::{default_config, merge};
use crate::error::ConfigError;
use crate::utils::scalar_text;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the persisted configuration inside a project directory.
pub const DEFAULT_CONFIG_FILE: &str = "flwr-k8s-config.yaml";

/// Configuration tree backed by a YAML file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    data: Mapping,
}

impl ConfigStore {
    /// Create a store seeded with defaults and overlay `path` if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut store = Self { path: path.into(), data: default_config() };
        if store.path.exists() {
            store.load()?;
        } else {
            tracing::debug!("No config at {}, using defaults", store.path.display());
        }
        Ok(store)
    }

    /// Open the default config file inside `project_dir`.
    pub fn in_project(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::open(project_dir.join(DEFAULT_CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &Mapping {
        &self.data
    }

    /// Merge the persisted file on top of the current tree.
    ///
    /// A missing file, an empty document, or a document whose top level is
    /// not a mapping leaves the tree untouched.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(ConfigError::Read { path: self.path.clone(), source }),
        };

        if is_blank_document(&content) {
            return Ok(());
        }

        let parsed: Value = serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Load { path: self.path.clone(), source })?;

        match parsed {
            Value::Mapping(update) => {
                tracing::debug!(
                    "Loaded {} top-level keys from {}",
                    update.len(),
                    self.path.display()
                );
                merge(&mut self.data, update);
            }
            Value::Null => {}
            other => {
                tracing::warn!(
                    "Ignoring {}: top level is not a mapping ({:?})",
                    self.path.display(),
                    other
                );
            }
        }
        Ok(())
    }

    /// Write the full tree back to the file, keeping insertion order.
    ///
    /// The content goes to a sibling temporary file first and is renamed over
    /// the target, so an interrupted write leaves the previous file intact.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(&self.data).map_err(ConfigError::Serialize)?;
        let save_err = |source| ConfigError::Save { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(save_err)?;
        }

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content).map_err(save_err)?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(save_err(source));
        }
        tracing::info!("Saved configuration to {}", self.path.display());
        Ok(())
    }

    /// Look up a dotted path such as `kubernetes.replicas`.
    ///
    /// Returns `None` when a segment is missing, an intermediate node is not a
    /// mapping, or the value is null.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// Like [`ConfigStore::get`], falling back to `default`.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }

    /// Assign `value` at a dotted path.
    ///
    /// Missing intermediate sections are created; an intermediate that holds a
    /// non-mapping value is replaced by an empty mapping.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let last = segments.pop().unwrap_or_default();

        let mut node = &mut self.data;
        for segment in segments {
            node = child_mapping(node, segment);
        }
        node.insert(Value::from(last), value.into());
    }

    /// Apply several dotted-path assignments in order.
    pub fn update<I, K, V>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (path, value) in updates {
            self.set(path.as_ref(), value);
        }
    }

    /// Flatten the tree into `(dotted.key, display value)` rows in tree order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        flatten_into(&self.data, "", &mut rows);
        rows
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'))
}

fn child_mapping<'a>(node: &'a mut Mapping, key: &str) -> &'a mut Mapping {
    let slot = node.entry(Value::from(key)).or_insert(Value::Null);
    if !slot.is_mapping() {
        *slot = Value::Mapping(Mapping::new());
    }
    slot.as_mapping_mut().expect("slot was just set to a mapping")
}

fn flatten_into(mapping: &Mapping, prefix: &str, rows: &mut Vec<(String, String)>) {
    for (key, value) in mapping {
        let key = scalar_text(key).unwrap_or_default();
        let full_key = if prefix.is_empty() { key } else { format!("{prefix}.{key}") };
        match value {
            Value::Mapping(nested) => flatten_into(nested, &full_key, rows),
            Value::Sequence(items) => {
                let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                rows.push((full_key, items.join(", ")));
            }
            other => rows.push((full_key, scalar_text(other).unwrap_or_default())),
        }
    }
}
