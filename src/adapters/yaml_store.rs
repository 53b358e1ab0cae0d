// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML-backed configuration store.
//!
//! This module provides a [`ConfigStore`] over a parsed YAML document. Key paths
//! such as `pluginsConfig['Tracer'].depth` walk mappings by name and lists by
//! 1-based index.

use crate::domain::{ConfigError, ConfigKey, KeySegment, Result};
use crate::ports::ConfigStore;
use directories::ProjectDirs;
use serde_yaml::Value;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const STORE_NAME: &str = "yaml-store";

/// Configuration store over a YAML document.
///
/// Failed lookups are reported with `tracing::warn!` unless diagnostics are
/// suppressed. The suppression flag is a `Cell`, so the store is not `Sync`;
/// wrap it in a mutex to share it between threads.
///
/// # Examples
///
/// ```rust
/// use scopedcfg::adapters::YamlConfigStore;
/// use scopedcfg::domain::ConfigKey;
/// use scopedcfg::ports::ConfigStore;
///
/// let store = YamlConfigStore::from_yaml_str(
///     "pluginsConfig:\n  Tracer:\n    depth: 3\n",
/// ).unwrap();
///
/// let key = ConfigKey::from("pluginsConfig['Tracer'].depth");
/// assert_eq!(store.lookup_int(&key).unwrap(), 3);
/// ```
#[derive(Debug)]
pub struct YamlConfigStore {
    /// Backing file, if the store was loaded from one
    file_path: Option<PathBuf>,
    /// Parsed document
    root: Value,
    /// Whether failed lookups are reported
    silent: Cell<bool>,
}

impl YamlConfigStore {
    /// Creates a store from YAML text.
    ///
    /// An empty document yields an empty store.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            root: parse_document(content)?,
            silent: Cell::new(false),
        })
    }

    /// Creates a store from a YAML file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use scopedcfg::adapters::YamlConfigStore;
    ///
    /// let store = YamlConfigStore::from_file("/etc/myapp/config.yaml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error(file_path, "Invalid or inaccessible path", e))?;
        let root = parse_document(&read_file(&canonical_path)?)?;

        tracing::debug!("Loaded configuration from {}", canonical_path.display());

        Ok(Self {
            file_path: Some(canonical_path),
            root,
            silent: Cell::new(false),
        })
    }

    /// Creates a store from `config.yaml` in the OS-appropriate configuration
    /// directory for the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates a store from a custom file name in the OS-appropriate
    /// configuration directory for the application.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: STORE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path of the backing file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Re-reads the backing file.
    ///
    /// Stores created from a string have nothing to reload and return `Ok(())`.
    /// On failure the previously loaded document is kept.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };

        self.root = parse_document(&read_file(path)?)?;
        tracing::debug!("Reloaded configuration from {}", path.display());
        Ok(())
    }

    /// Walks the document along `key`.
    fn resolve(&self, key: &ConfigKey) -> Result<&Value> {
        let not_found = || ConfigError::ConfigKeyNotFound {
            key: key.to_string(),
        };

        let mut current = &self.root;
        for segment in key.segments()? {
            current = match (segment, current) {
                (KeySegment::Field(name), Value::Mapping(map)) => map.get(name.as_str()),
                (KeySegment::Index(index), Value::Sequence(seq)) => seq.get(index - 1),
                _ => None,
            }
            .ok_or_else(not_found)?;
        }
        Ok(current)
    }

    /// Resolves `key` and converts the value, reporting any failure.
    fn typed<T>(
        &self,
        key: &ConfigKey,
        expected: &'static str,
        convert: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<T> {
        let result = self.resolve(key).and_then(|value| {
            convert(value)
                .ok_or_else(|| ConfigError::type_mismatch(key.as_str(), expected, kind(value)))
        });

        if let Err(e) = &result {
            if !self.silent.get() {
                tracing::warn!("{}: {}", STORE_NAME, e);
            }
        }
        result
    }
}

impl ConfigStore for YamlConfigStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    fn lookup_bool(&self, key: &ConfigKey) -> Result<bool> {
        self.typed(key, "boolean", Value::as_bool)
    }

    fn lookup_int(&self, key: &ConfigKey) -> Result<i64> {
        self.typed(key, "integer", Value::as_i64)
    }

    fn lookup_float(&self, key: &ConfigKey) -> Result<f64> {
        self.typed(key, "float", Value::as_f64)
    }

    fn lookup_string(&self, key: &ConfigKey) -> Result<String> {
        self.typed(key, "string", |v| v.as_str().map(str::to_string))
    }

    fn lookup_string_list(&self, key: &ConfigKey) -> Result<Vec<String>> {
        self.typed(key, "string list", |v| {
            v.as_sequence()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        })
    }

    fn lookup_int_list(&self, key: &ConfigKey) -> Result<Vec<i64>> {
        self.typed(key, "integer list", |v| {
            v.as_sequence()?.iter().map(Value::as_i64).collect()
        })
    }

    fn lookup_table_keys(&self, table: &ConfigKey) -> Result<Vec<String>> {
        self.typed(table, "table", |v| {
            Some(
                v.as_mapping()?
                    .keys()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect(),
            )
        })
    }

    fn diagnostics_suppressed(&self) -> bool {
        self.silent.get()
    }

    fn set_diagnostics_suppressed(&self, suppressed: bool) {
        self.silent.set(suppressed);
    }
}

/// Parses YAML text into a document root; empty text is an empty mapping.
fn parse_document(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse YAML: {}", e),
        source: Some(Box::new(e)),
    })
}

/// Reads a configuration file, refusing files over the size limit.
fn read_file(path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).map_err(|e| source_error(path, "Failed to read file metadata", e))?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: STORE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| source_error(path, "Failed to read configuration file", e))
}

fn source_error(path: &Path, what: &str, e: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: STORE_NAME.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(e)),
    }
}

/// Names the shape of a YAML value for diagnostics.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "table",
        Value::Tagged(_) => "tagged value",
    }
}
